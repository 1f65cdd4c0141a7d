//! Static historical dataset.
//!
//! Collections keep declaration order; the timeline relies on it to break
//! ties between events of the same year.

use crate::{
    Coordinates, EventCategory, Location, LocationCategory, Route, RouteCategory, TimelineEvent,
};
use std::sync::LazyLock;

static LOCATIONS: LazyLock<Vec<Location>> = LazyLock::new(build_locations);
static ROUTES: LazyLock<Vec<Route>> = LazyLock::new(build_routes);
static TIMELINE_EVENTS: LazyLock<Vec<TimelineEvent>> = LazyLock::new(build_timeline_events);

pub fn locations() -> &'static [Location] {
    &LOCATIONS
}

pub fn routes() -> &'static [Route] {
    &ROUTES
}

pub fn timeline_events() -> &'static [TimelineEvent] {
    &TIMELINE_EVENTS
}

pub fn location_by_id(id: &str) -> Option<&'static Location> {
    locations().iter().find(|location| location.id == id)
}

const VENICE: Coordinates = Coordinates::new(45.4408, 12.3155);
const CONSTANTINOPLE: Coordinates = Coordinates::new(41.0082, 28.9784);
const TREBIZOND: Coordinates = Coordinates::new(41.0027, 39.7168);
const TABRIZ: Coordinates = Coordinates::new(38.0962, 46.2738);
const BALKH: Coordinates = Coordinates::new(36.7581, 66.8957);
const KASHGAR: Coordinates = Coordinates::new(39.4704, 75.9699);
const KHANBALIQ: Coordinates = Coordinates::new(39.9042, 116.4074);
const QUANZHOU: Coordinates = Coordinates::new(24.8741, 118.6757);
const HORMUZ: Coordinates = Coordinates::new(27.1036, 56.4408);
const BAGHDAD: Coordinates = Coordinates::new(33.3152, 44.3661);
const GENOA: Coordinates = Coordinates::new(44.4056, 8.9463);

fn text(value: &str) -> String {
    value.to_string()
}

fn build_locations() -> Vec<Location> {
    vec![
        Location {
            id: text("venice"),
            name: text("Venice"),
            modern_name: None,
            coordinates: VENICE,
            category: LocationCategory::City,
            year_visited: Some(1254),
            significance: text("Birthplace and starting point of Marco Polo's journey"),
            description: text(
                "The wealthy maritime republic where Marco Polo was born in 1254. Venice was the premier trading power connecting Europe with the Byzantine Empire and the East.",
            ),
            historical_context: text(
                "Venice in the 13th century was at its commercial zenith, controlling much of Mediterranean trade. The city was a sophisticated republic with extensive trading networks.",
            ),
            economic_importance: Some(text(
                "Venice was the primary European gateway for Eastern luxury goods including spices, silk, and precious stones.",
            )),
            cultural_notes: Some(text(
                "A cosmopolitan city where East met West, with significant Byzantine and Islamic influences.",
            )),
        },
        Location {
            id: text("constantinople"),
            name: text("Constantinople"),
            modern_name: Some(text("Istanbul")),
            coordinates: CONSTANTINOPLE,
            category: LocationCategory::City,
            year_visited: Some(1260),
            significance: text("Capital of the Byzantine Empire, key stop on the journey East"),
            description: text(
                "The magnificent capital of the Byzantine Empire, serving as a crucial bridge between Europe and Asia.",
            ),
            historical_context: text(
                "In 1261, Constantinople was recently recaptured from the Crusaders by Michael VIII Palaiologos, restoring Byzantine rule.",
            ),
            economic_importance: Some(text(
                "Major trading hub controlling the Bosphorus strait, gateway to the Black Sea and routes to Asia.",
            )),
            cultural_notes: Some(text(
                "Center of Orthodox Christianity and heir to Roman imperial traditions, with impressive architecture including the Hagia Sophia.",
            )),
        },
        Location {
            id: text("trebizond"),
            name: text("Trebizond"),
            modern_name: Some(text("Trabzon")),
            coordinates: TREBIZOND,
            category: LocationCategory::City,
            year_visited: Some(1261),
            significance: text("Important port on the Black Sea, gateway to the Silk Road"),
            description: text(
                "A prosperous port city on the Black Sea coast, serving as a major terminus of the Silk Road.",
            ),
            historical_context: text(
                "Capital of the Empire of Trebizond, one of the successor states of the Byzantine Empire after 1204.",
            ),
            economic_importance: Some(text(
                "Critical link in trade routes connecting Central Asia with the Mediterranean world.",
            )),
            cultural_notes: Some(text(
                "Greek-speaking city with strong Byzantine traditions and connections to Georgian and Armenian cultures.",
            )),
        },
        Location {
            id: text("tabriz"),
            name: text("Tabriz"),
            modern_name: None,
            coordinates: TABRIZ,
            category: LocationCategory::City,
            year_visited: Some(1262),
            significance: text(
                "Major Persian trading city, administrative center of the Ilkhanate",
            ),
            description: text(
                "One of the most important cities in the Mongol Ilkhanate, serving as both an administrative and commercial center.",
            ),
            historical_context: text(
                "Under Hulagu Khan and his successors, Tabriz became the de facto capital of the Ilkhanate, ruling over Persia and parts of the Middle East.",
            ),
            economic_importance: Some(text(
                "Major hub for silk production and trade, connecting routes from China, Central Asia, and the Indian Ocean.",
            )),
            cultural_notes: Some(text(
                "Center of Persian culture under Mongol rule, with significant Islamic scholarly and artistic traditions.",
            )),
        },
        Location {
            id: text("balkh"),
            name: text("Balkh"),
            modern_name: None,
            coordinates: BALKH,
            category: LocationCategory::City,
            year_visited: Some(1263),
            significance: text("Ancient Silk Road city, \"Mother of Cities\""),
            description: text(
                "Known as the \"Mother of Cities,\" Balkh was one of the oldest and most important cities on the Silk Road.",
            ),
            historical_context: text(
                "Ancient Bactria, conquered by Alexander the Great, later a major Buddhist center, and by Marco Polo's time under Mongol control.",
            ),
            economic_importance: Some(text(
                "Strategic crossroads connecting routes from India, China, Central Asia, and the Middle East.",
            )),
            cultural_notes: Some(text(
                "Former center of Zoroastrianism and Buddhism, birthplace of the poet Rumi, rich multicultural heritage.",
            )),
        },
        Location {
            id: text("acre"),
            name: text("Acre"),
            modern_name: Some(text("Akko")),
            coordinates: Coordinates::new(32.9281, 35.0820),
            category: LocationCategory::City,
            year_visited: Some(1271),
            significance: text(
                "Crusader port where the Polos met the papal legate before heading East",
            ),
            description: text(
                "The last great stronghold of the Crusader states, where the Polos received letters from the newly elected Pope Gregory X for Kublai Khan.",
            ),
            historical_context: text(
                "Capital of the Kingdom of Jerusalem after 1191, Acre was a crowded Latin enclave ringed by Mamluk territory until its fall in 1291.",
            ),
            economic_importance: None,
            cultural_notes: Some(text(
                "Home to Venetian, Genoese and Pisan quarters living side by side with military orders and pilgrims.",
            )),
        },
        Location {
            id: text("tyre"),
            name: text("Tyre"),
            modern_name: Some(text("Sour")),
            coordinates: Coordinates::new(33.2705, 35.2038),
            category: LocationCategory::TradeCenter,
            year_visited: Some(1271),
            significance: text("Venetian-held quarter on the Levantine coast"),
            description: text(
                "Fortified harbor city on the Levantine coast where Venice held a third of the town under a long-standing treaty.",
            ),
            historical_context: text(
                "One of the last Crusader possessions, Tyre remained a Latin lordship until the Mamluk conquest of 1291.",
            ),
            economic_importance: Some(text(
                "Renowned for glass making, sugar refining and the purple dye trade shipped to Italian markets.",
            )),
            cultural_notes: None,
        },
        Location {
            id: text("kashgar"),
            name: text("Kashgar"),
            modern_name: None,
            coordinates: KASHGAR,
            category: LocationCategory::City,
            year_visited: Some(1274),
            significance: text("Oasis city at the crossroads of the Silk Road"),
            description: text(
                "Major oasis city where the northern and southern Silk Road routes converged before crossing the Taklamakan Desert.",
            ),
            historical_context: text(
                "Under the rule of the Mongol Yuan Dynasty, Kashgar was a vital staging point for caravans crossing between East and West.",
            ),
            economic_importance: Some(text(
                "Essential supply point for long-distance trade, famous for its bazaars and as a center for jade trade.",
            )),
            cultural_notes: Some(text(
                "Diverse population including Turkic peoples, with Islamic culture predominating alongside Buddhist influences.",
            )),
        },
        Location {
            id: text("khanbaliq"),
            name: text("Khanbaliq"),
            modern_name: Some(text("Beijing")),
            coordinates: KHANBALIQ,
            category: LocationCategory::Court,
            year_visited: Some(1275),
            significance: text(
                "Capital of Kublai Khan's Yuan Dynasty, Marco Polo's primary destination",
            ),
            description: text(
                "The magnificent capital of Kublai Khan's Mongol Empire, where Marco Polo spent nearly two decades in service.",
            ),
            historical_context: text(
                "Newly established capital of the Yuan Dynasty (1271-1368), representing the pinnacle of Mongol power in China.",
            ),
            economic_importance: Some(text(
                "Administrative center of the world's largest economy, controlling vast trade networks across Asia.",
            )),
            cultural_notes: Some(text(
                "Synthesis of Mongol, Chinese, Central Asian, and Persian cultures under Kublai Khan's cosmopolitan court.",
            )),
        },
        Location {
            id: text("quanzhou"),
            name: text("Quanzhou"),
            modern_name: Some(text("Zayton")),
            coordinates: QUANZHOU,
            category: LocationCategory::TradeCenter,
            year_visited: Some(1292),
            significance: text("Major Chinese port, departure point for Southeast Asia"),
            description: text(
                "One of China's most important ports, described by Marco Polo as one of the largest harbors in the world.",
            ),
            historical_context: text(
                "During the Song and Yuan dynasties, Quanzhou was China's primary international trading port.",
            ),
            economic_importance: Some(text(
                "Gateway for Chinese exports and imports, connecting China with Southeast Asia, India, and the Arabian Peninsula.",
            )),
            cultural_notes: Some(text(
                "Cosmopolitan port with significant Arab, Persian, and Southeast Asian merchant communities.",
            )),
        },
        Location {
            id: text("hormuz"),
            name: text("Hormuz"),
            modern_name: None,
            coordinates: HORMUZ,
            category: LocationCategory::TradeCenter,
            year_visited: Some(1293),
            significance: text("Strategic port controlling the Persian Gulf"),
            description: text(
                "Vital port city controlling access to the Persian Gulf and trade routes to India and beyond.",
            ),
            historical_context: text(
                "Under the rule of local dynasties, Hormuz was a key player in Indian Ocean trade networks.",
            ),
            economic_importance: Some(text(
                "Major entrepôt for spices, precious stones, and other luxury goods from India and Southeast Asia.",
            )),
            cultural_notes: Some(text(
                "Multicultural trading center with Persian, Arab, and Indian influences.",
            )),
        },
    ]
}

fn build_routes() -> Vec<Route> {
    vec![
        Route {
            id: text("northern-silk-road"),
            name: text("Northern Silk Road"),
            category: RouteCategory::SilkRoad,
            coordinates: vec![
                VENICE,
                CONSTANTINOPLE,
                TREBIZOND,
                TABRIZ,
                Coordinates::new(35.6892, 51.3890), // Tehran area
                BALKH,
                Coordinates::new(38.5449, 68.7870), // Dushanbe area
                KASHGAR,
                Coordinates::new(43.8254, 87.6177), // Urumqi area
                KHANBALIQ,
            ],
            description: text(
                "The primary overland route taken by the Polo family, passing through Central Asia",
            ),
            year_active: 1271,
        },
        Route {
            id: text("southern-sea-route"),
            name: text("Southern Sea Route"),
            category: RouteCategory::SeaRoute,
            coordinates: vec![
                QUANZHOU,
                Coordinates::new(1.3521, 103.8198), // Singapore area
                Coordinates::new(13.0827, 80.2707), // Chennai area
                Coordinates::new(19.0760, 72.8777), // Mumbai area
                HORMUZ,
                Coordinates::new(29.3117, 47.4818), // Kuwait area
                Coordinates::new(26.0667, 50.5577), // Bahrain
                Coordinates::new(25.2048, 55.2708), // Dubai area
                VENICE,
            ],
            description: text(
                "The sea route used by Marco Polo for his return journey, connecting the Indian Ocean with the Persian Gulf",
            ),
            year_active: 1292,
        },
    ]
}

fn event(
    id: &str,
    year: i32,
    title: &str,
    description: &str,
    category: EventCategory,
    location: Option<&str>,
    coordinates: Coordinates,
) -> TimelineEvent {
    TimelineEvent {
        id: text(id),
        year,
        title: text(title),
        description: text(description),
        category,
        location: location.map(text),
        coordinates: Some(coordinates),
    }
}

fn build_timeline_events() -> Vec<TimelineEvent> {
    vec![
        event(
            "marco-birth",
            1254,
            "Marco Polo Born in Venice",
            "Marco Polo is born into a merchant family in the Republic of Venice.",
            EventCategory::Biographical,
            Some("Venice"),
            VENICE,
        ),
        event(
            "mongol-conquest-baghdad",
            1258,
            "Mongols Conquer Baghdad",
            "Hulagu Khan captures Baghdad, ending the Abbasid Caliphate and establishing Mongol control over Mesopotamia.",
            EventCategory::Political,
            None,
            BAGHDAD,
        ),
        event(
            "first-polo-journey",
            1260,
            "Niccolò and Maffeo Polo Begin First Journey",
            "Marco's father and uncle embark on their first trading expedition to the East.",
            EventCategory::Travel,
            Some("Venice"),
            VENICE,
        ),
        event(
            "byzantine-reconquest",
            1261,
            "Byzantine Reconquest of Constantinople",
            "Michael VIII Palaiologos recaptures Constantinople from the Latin Empire, restoring Byzantine rule.",
            EventCategory::Political,
            Some("Constantinople"),
            CONSTANTINOPLE,
        ),
        event(
            "kublai-becomes-khan",
            1260,
            "Kublai Khan Becomes Great Khan",
            "Kublai Khan becomes the Great Khan of the Mongol Empire, later founding the Yuan Dynasty in China.",
            EventCategory::Political,
            None,
            KHANBALIQ,
        ),
        event(
            "polo-family-departs",
            1271,
            "The Polo Family Departs for Asia",
            "Marco Polo, aged 17, departs Venice with his father and uncle on their famous journey to the court of Kublai Khan.",
            EventCategory::Travel,
            Some("Venice"),
            VENICE,
        ),
        event(
            "yuan-dynasty-founded",
            1271,
            "Yuan Dynasty Founded",
            "Kublai Khan establishes the Yuan Dynasty, marking the beginning of Mongol rule over all of China.",
            EventCategory::Political,
            None,
            KHANBALIQ,
        ),
        event(
            "polos-reach-court",
            1275,
            "Polos Reach Kublai Khan's Court",
            "After four years of travel, the Polo family arrives at Khanbaliq and is received by Kublai Khan.",
            EventCategory::Travel,
            Some("Khanbaliq"),
            KHANBALIQ,
        ),
        event(
            "marco-in-service",
            1275,
            "Marco Polo Enters Khan's Service",
            "Marco Polo enters the service of Kublai Khan, beginning nearly two decades at the Mongol court.",
            EventCategory::Biographical,
            Some("Khanbaliq"),
            KHANBALIQ,
        ),
        event(
            "polos-return-journey",
            1292,
            "Polos Begin Return Journey",
            "The Polo family begins their return journey to Venice, escorting a Mongol princess by sea route.",
            EventCategory::Travel,
            Some("Quanzhou"),
            QUANZHOU,
        ),
        event(
            "polos-return-venice",
            1295,
            "Polos Return to Venice",
            "After 24 years, the Polo family returns to Venice, completing one of history's greatest journeys.",
            EventCategory::Travel,
            Some("Venice"),
            VENICE,
        ),
        event(
            "marco-imprisoned",
            1298,
            "Marco Polo Imprisoned in Genoa",
            "Marco Polo is captured during a naval battle between Venice and Genoa and imprisoned.",
            EventCategory::Biographical,
            None,
            GENOA,
        ),
        event(
            "book-written",
            1298,
            "The Travels of Marco Polo Written",
            "While imprisoned, Marco Polo dictates his travels to fellow prisoner Rustichello da Pisa.",
            EventCategory::Cultural,
            None,
            GENOA,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_location_ids_are_unique() {
        let ids: HashSet<&str> = locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), locations().len());
    }

    #[test]
    fn test_all_coordinates_in_range() {
        assert!(locations().iter().all(|l| l.coordinates.is_valid()));
        assert!(
            routes()
                .iter()
                .flat_map(|r| r.coordinates.iter())
                .all(|c| c.is_valid())
        );
        assert!(
            timeline_events()
                .iter()
                .filter_map(|e| e.coordinates)
                .all(|c| c.is_valid())
        );
    }

    #[test]
    fn test_routes_have_polylines() {
        for route in routes() {
            assert!(route.coordinates.len() >= 2, "{} has too few vertices", route.id);
        }
    }

    #[test]
    fn test_collection_sizes() {
        assert_eq!(locations().len(), 11);
        assert_eq!(routes().len(), 2);
        assert_eq!(timeline_events().len(), 13);
    }

    #[test]
    fn test_lookup_by_id() {
        let khanbaliq = location_by_id("khanbaliq").unwrap();
        assert_eq!(khanbaliq.modern_name.as_deref(), Some("Beijing"));
        assert!(location_by_id("samarkand").is_none());
    }

    #[test]
    fn test_event_location_names_are_informal() {
        let unnamed = timeline_events()
            .iter()
            .filter(|e| e.location.is_none())
            .count();
        assert_eq!(unnamed, 5);
    }
}
