//! Celebrations and their classification axes: rank, category, color.

use std::hash::{Hash, Hasher};

use ordo_core::PrecedenceClass;

/// Liturgical rank under the 1962 rubrics.
///
/// Declaration order is dignity order, so the derived `Ord` sorts
/// Class I first and plain feriae last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    /// I. class (1).
    ClassI = 1,
    /// II. class (2).
    ClassII = 2,
    /// III. class (3).
    ClassIII = 3,
    /// Privileged feria (4): Advent, Lent, Passiontide, ember days.
    FeriaPrivileged = 4,
    /// IV. class (5).
    ClassIV = 5,
    /// Ordinary feria (6).
    Feria = 6,
}

impl Rank {
    /// Numeric value (1 = highest dignity).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Label used by presentation (`"I. Class"`, …).
    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::ClassI => "I. Class",
            Rank::ClassII => "II. Class",
            Rank::ClassIII => "III. Class",
            Rank::FeriaPrivileged => "Privileged Feria",
            Rank::ClassIV => "IV. Class",
            Rank::Feria => "Feria",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Kind of celebration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Feast of Our Lord.
    FeastOfLord,
    /// Solemnity.
    Solemnity,
    /// Feast.
    Feast,
    /// Memorial.
    Memorial,
    /// Optional memorial.
    OptionalMemorial,
    /// Weekday.
    Feria,
    /// Vigil.
    Vigil,
    /// Day within an octave.
    WithinOctave,
    /// Octave day.
    OctaveDay,
    /// Rogation day.
    RogationDay,
    /// Ember day.
    EmberDay,
    /// Sunday.
    Sunday,
}

/// Liturgical color of the day's vestments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LiturgicalColor {
    /// White.
    White,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Violet.
    Violet,
    /// Rose (Gaudete and Laetare Sundays).
    Rose,
    /// Black (Good Friday, All Souls).
    Black,
    /// Gold.
    Gold,
}

impl LiturgicalColor {
    /// Every color, in display order.
    pub const ALL: [LiturgicalColor; 7] = [
        LiturgicalColor::White,
        LiturgicalColor::Red,
        LiturgicalColor::Green,
        LiturgicalColor::Violet,
        LiturgicalColor::Rose,
        LiturgicalColor::Black,
        LiturgicalColor::Gold,
    ];

    /// Capitalised English name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LiturgicalColor::White => "White",
            LiturgicalColor::Red => "Red",
            LiturgicalColor::Green => "Green",
            LiturgicalColor::Violet => "Violet",
            LiturgicalColor::Rose => "Rose",
            LiturgicalColor::Black => "Black",
            LiturgicalColor::Gold => "Gold",
        }
    }
}

impl std::fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single celebration: a Sunday, a feria, a feast, an octave day, ….
///
/// Celebrations carry no date; the date is the key under which a
/// celebration is stored.  Equality and hashing consider only
/// [`id`](Self::id), which is stable and suitable as a lookup key for
/// external tables (readings, propers).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Celebration {
    id: String,
    title: String,
    title_vernacular: String,
    rank: Rank,
    category: Category,
    color: LiturgicalColor,
    precedence: PrecedenceClass,
}

impl Celebration {
    /// Create a celebration.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        title_vernacular: impl Into<String>,
        rank: Rank,
        category: Category,
        color: LiturgicalColor,
        precedence: PrecedenceClass,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            title_vernacular: title_vernacular.into(),
            rank,
            category,
            color,
            precedence,
        }
    }

    /// Stable identifier (`"easter-sunday"`, `"sunday-advent-3"`, …).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latin title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// English title.
    pub fn title_vernacular(&self) -> &str {
        &self.title_vernacular
    }

    /// Rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Liturgical color.
    pub fn color(&self) -> LiturgicalColor {
        self.color
    }

    /// Precedence class (1 = highest).
    pub fn precedence(&self) -> PrecedenceClass {
        self.precedence
    }

    /// Sort key for precedence resolution: precedence first, rank second.
    pub fn precedence_key(&self) -> (PrecedenceClass, Rank) {
        (self.precedence, self.rank)
    }
}

impl PartialEq for Celebration {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Celebration {}

impl Hash for Celebration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Celebration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title_vernacular, self.rank)
    }
}
