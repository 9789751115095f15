//! data/record.rs — the loaded data model.
//!
//! Everything here is read-only after load: one `FeatureRecord` per analyzed
//! gait variable, plus the demographics sheet passed through for display.

/// The four clinical groups, in chart order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Hc,
    Rbd,
    MildPd,
    ModPd,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Hc, Group::Rbd, Group::MildPd, Group::ModPd];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Group::Hc => 0,
            Group::Rbd => 1,
            Group::MildPd => 2,
            Group::ModPd => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Group::Hc => "HC",
            Group::Rbd => "RBD",
            Group::MildPd => "MildPD",
            Group::ModPd => "ModPD",
        }
    }

    /// Workbook column carrying this group's mean.
    pub fn mean_column(self) -> &'static str {
        match self {
            Group::Hc => "HC_mean",
            Group::Rbd => "RBD_mean",
            Group::MildPd => "MildPD_mean",
            Group::ModPd => "ModPD_mean",
        }
    }

    /// Workbook column carrying this group's standard deviation.
    pub fn std_column(self) -> &'static str {
        match self {
            Group::Hc => "HC_std",
            Group::Rbd => "RBD_std",
            Group::MildPd => "MildPD_std",
            Group::ModPd => "ModPD_std",
        }
    }
}

/// Feature category, fixed for the process lifetime.
///
/// `Ord` follows declaration order; per-category ranking groups records in
/// this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    DemoClinical,
    SpatioTemporal,
    Kinematics,
    TeleSignal,
    MotorIdentity,
    Frequency,
    Tug,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::DemoClinical,
        Category::SpatioTemporal,
        Category::Kinematics,
        Category::TeleSignal,
        Category::MotorIdentity,
        Category::Frequency,
        Category::Tug,
    ];

    /// Map the workbook's integer code (1–7). Unknown codes are a
    /// data-quality violation and rejected at load.
    pub fn from_code(code: i64) -> Option<Category> {
        match code {
            1 => Some(Category::DemoClinical),
            2 => Some(Category::SpatioTemporal),
            3 => Some(Category::Kinematics),
            4 => Some(Category::TeleSignal),
            5 => Some(Category::MotorIdentity),
            6 => Some(Category::Frequency),
            7 => Some(Category::Tug),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Category::DemoClinical => 1,
            Category::SpatioTemporal => 2,
            Category::Kinematics => 3,
            Category::TeleSignal => 4,
            Category::MotorIdentity => 5,
            Category::Frequency => 6,
            Category::Tug => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::DemoClinical => "Demo+Clinical",
            Category::SpatioTemporal => "Spatio-temporal",
            Category::Kinematics => "Kinematics",
            Category::TeleSignal => "Tele-signal",
            Category::MotorIdentity => "Motor-identity",
            Category::Frequency => "Frequency",
            Category::Tug => "TUG",
        }
    }
}

/// The six unordered group pairs carrying a significance flag, in workbook
/// column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupPair {
    HcRbd,
    HcMildPd,
    HcModPd,
    MildPdRbd,
    ModPdRbd,
    MildPdModPd,
}

impl GroupPair {
    pub const ALL: [GroupPair; 6] = [
        GroupPair::HcRbd,
        GroupPair::HcMildPd,
        GroupPair::HcModPd,
        GroupPair::MildPdRbd,
        GroupPair::ModPdRbd,
        GroupPair::MildPdModPd,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            GroupPair::HcRbd => 0,
            GroupPair::HcMildPd => 1,
            GroupPair::HcModPd => 2,
            GroupPair::MildPdRbd => 3,
            GroupPair::ModPdRbd => 4,
            GroupPair::MildPdModPd => 5,
        }
    }

    pub fn members(self) -> (Group, Group) {
        match self {
            GroupPair::HcRbd => (Group::Hc, Group::Rbd),
            GroupPair::HcMildPd => (Group::Hc, Group::MildPd),
            GroupPair::HcModPd => (Group::Hc, Group::ModPd),
            GroupPair::MildPdRbd => (Group::MildPd, Group::Rbd),
            GroupPair::ModPdRbd => (Group::ModPd, Group::Rbd),
            GroupPair::MildPdModPd => (Group::MildPd, Group::ModPd),
        }
    }

    /// Workbook flag column for this pair.
    pub fn column(self) -> &'static str {
        match self {
            GroupPair::HcRbd => "HC_RBD",
            GroupPair::HcMildPd => "HC_MildPD",
            GroupPair::HcModPd => "HC_ModPD",
            GroupPair::MildPdRbd => "MildPD_RBD",
            GroupPair::ModPdRbd => "ModPD_RBD",
            GroupPair::MildPdModPd => "MildPD_ModPD",
        }
    }

    /// Display label, e.g. "HC vs RBD".
    pub fn label(self) -> String {
        let (a, b) = self.members();
        format!("{} vs {}", a.label(), b.label())
    }
}

/// Mean and standard deviation for one group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupStat {
    pub mean: f64,
    pub std: f64,
}

/// One row of the statistics sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    pub name: String,
    pub category: Category,
    pub anova_p: f64,
    pub kruskal_p: f64,
    pub eta_squared: f64,
    /// Indexed by `Group::index`.
    pub stats: [GroupStat; 4],
    /// Indexed by `GroupPair::index`.
    pub significant: [bool; 6],
}

impl FeatureRecord {
    #[inline]
    pub fn stat(&self, group: Group) -> GroupStat {
        self.stats[group.index()]
    }

    #[inline]
    pub fn is_significant(&self, pair: GroupPair) -> bool {
        self.significant[pair.index()]
    }

    /// Pairs with a set flag, in workbook column order.
    pub fn significant_pairs(&self) -> Vec<GroupPair> {
        GroupPair::ALL
            .into_iter()
            .filter(|p| self.is_significant(*p))
            .collect()
    }
}

/// Demographics sheet, opaque beyond display.
#[derive(Clone, Debug, Default)]
pub struct DemoTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
