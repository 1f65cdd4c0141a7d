use moon::*;

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Incoming up-message debugging

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Marco Polo's Travels - Interactive Historical Map")
        .index_by_robots(false)
}

// The explorer is fully client-side; the server only hosts the bundle.
async fn up_msg_handler(_req: UpMsgRequest<()>) {
    debug_log!(DEBUG_BACKEND, "Ignoring up-message, the explorer has no server state");
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    println!("Serving Marco Polo's Travels explorer");
    start(frontend, up_msg_handler, |error| {
        eprintln!("Up-message handler error: {error:?}");
    })
    .await
}
