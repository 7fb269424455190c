use super::directive::DirectiveKind;
use std::fmt;
use std::str::FromStr;

/// Direction in which a residue's pKa must cross the pH threshold to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Above,
    Below,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Above => ">",
            Comparison::Below => "<",
        }
    }

    /// Strict comparison; the threshold itself is never admitted.
    pub fn admits(&self, pka: f64, threshold: f64) -> bool {
        match self {
            Comparison::Above => pka > threshold,
            Comparison::Below => pka < threshold,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Selection rule and psfgen mapping attached to a titratable residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidueBehavior {
    pub comparison: Comparison,
    pub directive: DirectiveKind,
    pub psfgen_code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitratableResidue {
    Asp,
    Glu,
    His,
    Lys,
}

impl TitratableResidue {
    /// Default processing order of the filtered report.
    pub const ALL: [TitratableResidue; 4] = [
        TitratableResidue::Asp,
        TitratableResidue::Glu,
        TitratableResidue::His,
        TitratableResidue::Lys,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TitratableResidue::Asp => "ASP",
            TitratableResidue::Glu => "GLU",
            TitratableResidue::His => "HIS",
            TitratableResidue::Lys => "LYS",
        }
    }

    pub fn behavior(&self) -> ResidueBehavior {
        match self {
            TitratableResidue::Asp => ResidueBehavior {
                comparison: Comparison::Above,
                directive: DirectiveKind::Patch,
                psfgen_code: "ASPP",
            },
            TitratableResidue::Glu => ResidueBehavior {
                comparison: Comparison::Above,
                directive: DirectiveKind::Patch,
                psfgen_code: "GLUP",
            },
            TitratableResidue::His => ResidueBehavior {
                comparison: Comparison::Above,
                directive: DirectiveKind::Mutate,
                psfgen_code: "HSP",
            },
            TitratableResidue::Lys => ResidueBehavior {
                comparison: Comparison::Below,
                directive: DirectiveKind::Patch,
                psfgen_code: "LSN",
            },
        }
    }

    /// Matches a section header such as `ASP: pKa > 7.0` by its `NAME:` prefix.
    pub fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|res| {
            line.strip_prefix(res.name())
                .is_some_and(|rest| rest.starts_with(':'))
        })
    }
}

impl fmt::Display for TitratableResidue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TitratableResidue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASP" => Ok(TitratableResidue::Asp),
            "GLU" => Ok(TitratableResidue::Glu),
            "HIS" => Ok(TitratableResidue::His),
            "LYS" => Ok(TitratableResidue::Lys),
            _ => Err(format!("Unrecognized residue: {}", s)),
        }
    }
}
