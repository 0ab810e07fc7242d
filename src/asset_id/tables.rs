//! Static name → code tables for asset identifiers

/// Key of the fallback entry every table ends with
pub const DEFAULT_KEY: &str = "Default";

/// Ordered name → code mapping with a trailing `Default` entry
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    pub segment: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl CodeTable {
    /// Code for `name`, or the `Default` code when the name is unknown
    pub fn code_for(&self, name: &str) -> &'static str {
        self.lookup(name).unwrap_or_else(|| self.default_code())
    }

    /// Code for `name` without falling back
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }

    /// First name mapped to `code`
    ///
    /// Real names precede `Default`, so a shared code resolves to the real name.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }

    pub fn default_code(&self) -> &'static str {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| *n == DEFAULT_KEY)
            .map(|(_, code)| *code)
            .unwrap_or("")
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

pub static LOCATION_CODES: CodeTable = CodeTable {
    segment: "location",
    entries: &[
        ("Bangalore", "BLR"),
        ("Mumbai", "MUM"),
        ("Delhi", "DEL"),
        ("Chennai", "CHN"),
        ("Hyderabad", "HYD"),
        ("Pune", "PUN"),
        ("Kolkata", "KOL"),
        ("Noida", "NOI"),
        ("Gurgaon", "GGN"),
        ("Ahmedabad", "AMD"),
        (DEFAULT_KEY, "BLR"),
    ],
};

pub static DEPARTMENT_CODES: CodeTable = CodeTable {
    segment: "department",
    entries: &[
        ("IT", "IT"),
        ("HR", "HR"),
        ("Finance", "FIN"),
        ("Operations", "OPS"),
        ("Marketing", "MKT"),
        ("Sales", "SLS"),
        ("Administration", "ADM"),
        ("Engineering", "ENG"),
        ("Legal", "LGL"),
        ("Facilities", "FAC"),
        (DEFAULT_KEY, "IT"),
    ],
};

pub static ASSET_TYPE_CODES: CodeTable = CodeTable {
    segment: "asset_type",
    entries: &[
        ("Laptop", "LTP"),
        ("Desktop", "DSK"),
        ("Monitor", "MON"),
        ("Printer", "PRN"),
        ("Server", "SRV"),
        ("Mobile", "MOB"),
        ("Tablet", "TAB"),
        ("Network Device", "NET"),
        ("Furniture", "FUR"),
        ("Vehicle", "VEH"),
        ("Equipment", "EQP"),
        (DEFAULT_KEY, "EQP"),
    ],
};
