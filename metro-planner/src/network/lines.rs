//! Built-in Bengaluru metro line table.
//!
//! Station order follows each corridor end to end. Names must match the
//! station coordinate table exactly.

/// A metro line and its stations in running order.
#[derive(Debug, Clone, Copy)]
pub struct MetroLine {
    pub name: &'static str,
    pub stations: &'static [&'static str],
}

impl MetroLine {
    pub fn serves(&self, station: &str) -> bool {
        self.stations.contains(&station)
    }
}

pub const PURPLE_LINE: MetroLine = MetroLine {
    name: "Purple Line",
    stations: &[
        "Whitefield (Kadugodi)",
        "Hopefarm Channasandra",
        "Kadugodi Tree Park",
        "Pattandur Agrahara",
        "Sri Sathya Sai Hospital",
        "Nallurhalli",
        "Kundalahalli",
        "Seetharamapalya",
        "Hoodi",
        "Garudacharpalya",
        "Singayyanapalya",
        "Krishnarajapura",
        "Benniganahalli",
        "Baiyappanahalli",
        "Swami Vivekananda Road",
        "Indiranagar",
        "Halasuru",
        "Trinity",
        "Mahatma Gandhi Road",
        "Cubbon Park",
        "Dr. B. R. Ambedkar Station, Vidhana Soudha",
        "Sir M. Visvesvaraya Station, Central College",
        "Nadaprabhu Kempegowda Station, Majestic",
        "Krantivira Sangolli Rayanna Railway Station",
        "Magadi Road",
        "Sri Balagangadharanatha Swamiji Station, Hosahalli",
        "Vijayanagar",
        "Attiguppe",
        "Deepanjali Nagar",
        "Mysuru Road",
        "Pantharapalya–Nayandahalli",
        "Rajarajeshwari Nagar",
        "Jnanabharathi",
        "Pattanagere",
        "Kengeri Bus Terminal",
        "Kengeri",
        "Challaghatta",
    ],
};

pub const GREEN_LINE: MetroLine = MetroLine {
    name: "Green Line",
    stations: &[
        "Madavara",
        "Chikkabidarakallu",
        "Manjunathanagara",
        "Nagasandra",
        "Dasarahalli",
        "Jalahalli",
        "Peenya Industry",
        "Peenya",
        "Goraguntepalya",
        "Yeshwanthpur",
        "Sandal Soap Factory",
        "Mahalakshmi",
        "Rajajinagar",
        "Mahakavi Kuvempu Road",
        "Srirampura",
        "Mantri Square Sampige Road",
        "Nadaprabhu Kempegowda Station, Majestic",
        "Chickpete",
        "Krishna Rajendra Market",
        "National College",
        "Lalbagh",
        "South End Circle",
        "Jayanagar",
        "Rashtreeya Vidyalaya Road",
        "Banashankari",
        "Jaya Prakash Nagar",
        "Yelachenahalli",
        "Konanakunte Cross",
        "Doddakallasandra",
        "Vajarahalli",
        "Thalaghattapura",
        "Silk Institute",
    ],
};

pub const YELLOW_LINE: MetroLine = MetroLine {
    name: "Yellow Line",
    stations: &[
        "Rashtreeya Vidyalaya Road",
        "Ragigudda",
        "Jayadeva Hospital",
        "BTM Layout",
        "Central Silk Board",
        "Bommanahalli",
        "Hongasandra",
        "Kudlu Gate",
        "Singasandra",
        "Hosa Road",
        "Beratena Agrahara",
        "Electronic City",
        "Infosys Foundation Konappana Agrahara",
        "Huskur Road",
        "Biocon Hebbagodi",
        "Delta Electronics Bommasandra",
    ],
};

/// All lines, in display order.
pub const BENGALURU_LINES: &[MetroLine] = &[PURPLE_LINE, GREEN_LINE, YELLOW_LINE];

/// Names of every line serving `station`, in [`BENGALURU_LINES`] order.
pub fn lines_serving(lines: &[MetroLine], station: &str) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.serves(station))
        .map(|line| line.name.to_string())
        .collect()
}
