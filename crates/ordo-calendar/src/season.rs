//! Liturgical seasons of the temporal cycle.

/// One of the ten seasons of the 1962 temporal cycle.
///
/// Seasons never overlap; every date of a year belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// Advent.
    Advent,
    /// Christmastide (both ends of the civil year).
    Christmas,
    /// Time after Epiphany.
    AfterEpiphany,
    /// Septuagesima (pre-Lent).
    Septuagesima,
    /// Lent, from Ash Wednesday to the eve of Passion Sunday.
    Lent,
    /// Passiontide, Passion Sunday to the eve of Palm Sunday.
    Passiontide,
    /// Holy Week, Palm Sunday to Holy Saturday.
    HolyWeek,
    /// Eastertide, Easter to the eve of the Ascension.
    Easter,
    /// Ascensiontide, Ascension to Pentecost inclusive.
    Ascensiontide,
    /// Time after Pentecost.
    AfterPentecost,
}

impl Season {
    /// All seasons.
    pub const ALL: [Season; 10] = [
        Season::Advent,
        Season::Christmas,
        Season::AfterEpiphany,
        Season::Septuagesima,
        Season::Lent,
        Season::Passiontide,
        Season::HolyWeek,
        Season::Easter,
        Season::Ascensiontide,
        Season::AfterPentecost,
    ];

    /// Stable key embedded in celebration identifiers (`sunday-{key}-{week}`).
    pub fn key(&self) -> &'static str {
        match self {
            Season::Advent => "advent",
            Season::Christmas => "christmas",
            Season::AfterEpiphany => "afterEpiphany",
            Season::Septuagesima => "septuagesima",
            Season::Lent => "lent",
            Season::Passiontide => "passiontide",
            Season::HolyWeek => "holyWeek",
            Season::Easter => "easter",
            Season::Ascensiontide => "ascensiontide",
            Season::AfterPentecost => "afterPentecost",
        }
    }

    /// English name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Advent => "Advent",
            Season::Christmas => "Christmastide",
            Season::AfterEpiphany => "Time after Epiphany",
            Season::Septuagesima => "Septuagesima",
            Season::Lent => "Lent",
            Season::Passiontide => "Passiontide",
            Season::HolyWeek => "Holy Week",
            Season::Easter => "Eastertide",
            Season::Ascensiontide => "Ascensiontide",
            Season::AfterPentecost => "Time after Pentecost",
        }
    }

    /// Latin name.
    pub fn latin_name(&self) -> &'static str {
        match self {
            Season::Advent => "Tempus Adventus",
            Season::Christmas => "Tempus Nativitatis",
            Season::AfterEpiphany => "Tempus post Epiphaniam",
            Season::Septuagesima => "Tempus Septuagesimae",
            Season::Lent => "Tempus Quadragesimae",
            Season::Passiontide => "Tempus Passionis",
            Season::HolyWeek => "Hebdomada Sancta",
            Season::Easter => "Tempus Paschale",
            Season::Ascensiontide => "Tempus Ascensionis",
            Season::AfterPentecost => "Tempus post Pentecosten",
        }
    }

    /// Phrase qualifying a Sunday or week of this season in Latin titles
    /// (`Dominica II Adventus`, `Feria II infra hebdomadam III post Pentecosten`).
    pub(crate) fn latin_qualifier(&self) -> &'static str {
        match self {
            Season::Advent => "Adventus",
            Season::Christmas => "Nativitatis",
            Season::AfterEpiphany => "post Epiphaniam",
            Season::Septuagesima => "Septuagesimae",
            Season::Lent => "in Quadragesima",
            Season::Passiontide => "de Passione",
            Season::HolyWeek => "Hebdomadae Sanctae",
            Season::Easter => "Paschae",
            Season::Ascensiontide => "post Ascensionem",
            Season::AfterPentecost => "post Pentecosten",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
