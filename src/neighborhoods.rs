//! Static list of Craigslist neighborhoods offered by the form
//!
//! `value` is the Craigslist `nh` query parameter, `name` is the label shown
//! next to the checkbox. The list is rendered in declaration order.

/// A single selectable neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub value: &'static str,
    pub name: &'static str,
}

/// San Francisco neighborhoods as exposed by Craigslist's `nh` filter
pub const NEIGHBORHOODS: &[Neighborhood] = &[
    Neighborhood { value: "1", name: "alamo square / nopa" },
    Neighborhood { value: "2", name: "bayview" },
    Neighborhood { value: "3", name: "bernal heights" },
    Neighborhood { value: "4", name: "castro / upper market" },
    Neighborhood { value: "5", name: "cole valley / ashbury hts" },
    Neighborhood { value: "6", name: "downtown / civic / van ness" },
    Neighborhood { value: "7", name: "excelsior / outer mission" },
    Neighborhood { value: "8", name: "financial district" },
    Neighborhood { value: "9", name: "glen park" },
    Neighborhood { value: "10", name: "lower haight" },
    Neighborhood { value: "11", name: "haight ashbury" },
    Neighborhood { value: "12", name: "hayes valley" },
    Neighborhood { value: "13", name: "ingleside / SFSU / CCSF" },
    Neighborhood { value: "14", name: "inner richmond" },
    Neighborhood { value: "15", name: "inner sunset / UCSF" },
    Neighborhood { value: "16", name: "laurel hts / presidio" },
    Neighborhood { value: "17", name: "marina / cow hollow" },
    Neighborhood { value: "18", name: "mission district" },
    Neighborhood { value: "19", name: "nob hill" },
    Neighborhood { value: "20", name: "lower nob hill" },
    Neighborhood { value: "21", name: "noe valley" },
    Neighborhood { value: "22", name: "north beach / telegraph hill" },
    Neighborhood { value: "23", name: "pacific heights" },
    Neighborhood { value: "24", name: "lower pac hts" },
    Neighborhood { value: "25", name: "potrero hill" },
    Neighborhood { value: "26", name: "russian hill" },
    Neighborhood { value: "27", name: "SOMA / south beach" },
    Neighborhood { value: "28", name: "sunset / parkside" },
    Neighborhood { value: "29", name: "tenderloin" },
    Neighborhood { value: "30", name: "treasure island" },
    Neighborhood { value: "31", name: "twin peaks / diamond hts" },
    Neighborhood { value: "32", name: "USF / anza vista" },
    Neighborhood { value: "33", name: "visitacion valley" },
    Neighborhood { value: "34", name: "west portal / forest hill" },
    Neighborhood { value: "35", name: "western addition" },
];

/// Whether `value` names a neighborhood in the list
pub fn is_known(value: &str) -> bool {
    NEIGHBORHOODS.iter().any(|n| n.value == value)
}

/// Look up a neighborhood by its position in the list
pub fn get(index: usize) -> Option<&'static Neighborhood> {
    NEIGHBORHOODS.get(index)
}
