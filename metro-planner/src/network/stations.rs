//! Built-in Bengaluru station coordinates.
//!
//! Used when no station file is configured. Order is the load order the
//! registry keeps, so it also decides proximity ties.

use crate::domain::LatLng;

use super::error::NetworkError;
use super::lines::MetroLine;
use super::registry::StationRegistry;

/// `(name, latitude, longitude)` for every station on the built-in lines.
pub const BENGALURU_STATIONS: &[(&str, f64, f64)] = &[
    ("Whitefield (Kadugodi)", 12.995626, 77.75780499999999),
    ("Hopefarm Channasandra", 12.987348, 77.753796),
    ("Kadugodi Tree Park", 12.985711, 77.746842),
    ("Pattandur Agrahara", 12.987622, 77.737737),
    ("Sri Sathya Sai Hospital", 12.98122, 77.72753999999999),
    ("Nallurhalli", 12.976632, 77.724752),
    ("Kundalahalli", 12.977607, 77.71552299999999),
    ("Seetharamapalya", 12.9808333, 77.70883549999999),
    ("Hoodi", 12.988782, 77.711364),
    ("Garudacharpalya", 12.993482, 77.70365799999999),
    ("Singayyanapalya", 12.996557, 77.692708),
    ("Krishnarajapura", 12.999922, 77.677607),
    ("Benniganahalli", 12.9963737, 77.6682628),
    ("Baiyappanahalli", 12.98959, 77.65366),
    ("Swami Vivekananda Road", 12.9859106, 77.645004),
    ("Indiranagar", 12.9782619, 77.63852570000002),
    ("Halasuru", 12.9763635, 77.62671499999999),
    ("Trinity", 12.973342, 77.615719),
    ("Mahatma Gandhi Road", 12.9755162, 77.6066919),
    ("Cubbon Park", 12.9809008, 77.59746539999999),
    ("Dr. B. R. Ambedkar Station, Vidhana Soudha", 12.9796925, 77.5926343),
    ("Sir M. Visvesvaraya Station, Central College", 12.9742805, 77.5839458),
    ("Nadaprabhu Kempegowda Station, Majestic", 12.975692, 77.572844),
    ("Krantivira Sangolli Rayanna Railway Station", 12.9758403, 77.5657561),
    ("Magadi Road", 12.9756582, 77.55541149999999),
    ("Sri Balagangadharanatha Swamiji Station, Hosahalli", 12.9742975, 77.5454436),
    ("Vijayanagar", 12.9708197, 77.5373638),
    ("Attiguppe", 12.9621018, 77.5337131),
    ("Deepanjali Nagar", 12.952215, 77.5371013),
    ("Mysuru Road", 12.9467268, 77.53007389999999),
    ("Pantharapalya–Nayandahalli", 12.946231, 77.52985),
    ("Rajarajeshwari Nagar", 12.936693, 77.519556),
    ("Jnanabharathi", 12.935446, 77.51217799999999),
    ("Pattanagere", 12.924276, 77.498305),
    ("Kengeri Bus Terminal", 12.914642, 77.487704),
    ("Kengeri", 12.9078282, 77.47636670000001),
    ("Challaghatta", 12.8973787, 77.4612408),
    ("Madavara", 13.0573826, 77.47295969999999),
    ("Chikkabidarakallu", 13.052417, 77.487894),
    ("Manjunathanagara", 13.050155, 77.494377),
    ("Nagasandra", 13.0481133, 77.5001231),
    ("Dasarahalli", 13.0435419, 77.51237909999999),
    ("Jalahalli", 13.0395842, 77.51983779999999),
    ("Peenya Industry", 13.0363672, 77.52552039999999),
    ("Peenya", 13.0329869, 77.53346909999999),
    ("Goraguntepalya", 13.028486, 77.5408673),
    ("Yeshwanthpur", 13.0233093, 77.5498636),
    ("Sandal Soap Factory", 13.0148546, 77.5545643),
    ("Mahalakshmi", 13.0083376, 77.5488342),
    ("Rajajinagar", 13.0003458, 77.54974829999999),
    ("Mahakavi Kuvempu Road", 12.9985023, 77.5569472),
    ("Srirampura", 12.9965258, 77.5633563),
    ("Mantri Square Sampige Road", 12.9905452, 77.5708049),
    ("Chickpete", 12.9675461, 77.5747925),
    ("Krishna Rajendra Market", 12.960161, 77.574479),
    ("National College", 12.9506135, 77.5737362),
    ("Lalbagh", 12.946287, 77.5800611),
    ("South End Circle", 12.9383208, 77.58007479999999),
    ("Jayanagar", 12.9296749, 77.5801753),
    ("Rashtreeya Vidyalaya Road", 12.9215877, 77.5802611),
    ("Banashankari", 12.9155385, 77.5736288),
    ("Jaya Prakash Nagar", 12.9075563, 77.573061),
    ("Yelachenahalli", 12.8960529, 77.5701606),
    ("Konanakunte Cross", 12.888909, 77.56277999999999),
    ("Doddakallasandra", 12.884636, 77.552824),
    ("Vajarahalli", 12.877485, 77.544817),
    ("Thalaghattapura", 12.871366, 77.538439),
    ("Silk Institute", 12.861672, 77.52998099999999),
    ("Ragigudda", 12.9170037, 77.58833589999999),
    ("Jayadeva Hospital", 12.9167331, 77.6000931),
    ("BTM Layout", 12.916488, 77.60806099999999),
    ("Central Silk Board", 12.9164445, 77.62052609999999),
    ("Bommanahalli", 12.9107316, 77.62632789999999),
    ("Hongasandra", 12.9017117, 77.6319874),
    ("Kudlu Gate", 12.8900206, 77.63918190000001),
    ("Singasandra", 12.8808676, 77.6447379),
    ("Hosa Road", 12.8701588, 77.65275489999999),
    ("Beratena Agrahara", 12.863676, 77.65789699999999),
    ("Electronic City", 12.8562351, 77.6637798),
    ("Infosys Foundation Konappana Agrahara", 12.84626, 77.67114699999999),
    ("Huskur Road", 12.838885, 77.677433),
    ("Biocon Hebbagodi", 12.828967, 77.681405),
    ("Delta Electronics Bommasandra", 12.8193154, 77.68834009999999),
];

impl StationRegistry {
    /// Registry of the built-in Bengaluru stations, with line membership
    /// from `lines`.
    pub fn bengaluru(lines: &[MetroLine]) -> Result<Self, NetworkError> {
        let rows = BENGALURU_STATIONS
            .iter()
            .map(|&(name, lat, lng)| {
                LatLng::new(lat, lng)
                    .map(|location| (name, location))
                    .map_err(|source| NetworkError::InvalidCoordinate {
                        station: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        StationRegistry::from_locations(rows, lines)
    }
}
