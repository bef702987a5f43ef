use crate::{
    error::{Result, WmwError},
    normal::Tail,
};
use std::{fmt, str::FromStr};

/// Defines the value reported for each index set and column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Lower tail p-value, the index set ranks higher than the background
    PGreater,

    /// Upper tail p-value, the index set ranks lower than the background
    PLess,

    /// Two sided p-value
    PTwoSided,

    /// The raw U-Statistic, no normal approximation is performed
    U,

    /// `|log10(p)|` of the lower tail p-value
    AbsLog10PGreater,

    /// `log10(p)` of the upper tail p-value. This is signed and is not the absolute value.
    Log10PLess,

    /// `|log10(p)|` of the two sided p-value
    AbsLog10PTwoSided,

    /// Directional two sided score: `|log10(p_lower)|` when the lower tail is smaller,
    /// `-|log10(p_upper)|` otherwise
    Q,
}

/// Groups the value types by the hypothesis they evaluate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Greater,
    Less,
    TwoSided,
    Statistic,
}

impl Family {
    /// The normal tail evaluated for this family, `None` when no z-score is computed
    pub fn tail(&self) -> Option<Tail> {
        match self {
            Family::Greater => Some(Tail::Lower),
            Family::Less => Some(Tail::Upper),
            Family::TwoSided => Some(Tail::Both),
            Family::Statistic => None,
        }
    }
}

impl ValueType {
    pub const ALL: [ValueType; 8] = [
        ValueType::PGreater,
        ValueType::PLess,
        ValueType::PTwoSided,
        ValueType::U,
        ValueType::AbsLog10PGreater,
        ValueType::Log10PLess,
        ValueType::AbsLog10PTwoSided,
        ValueType::Q,
    ];

    pub fn family(&self) -> Family {
        match self {
            ValueType::PGreater | ValueType::AbsLog10PGreater => Family::Greater,
            ValueType::PLess | ValueType::Log10PLess => Family::Less,
            ValueType::PTwoSided | ValueType::AbsLog10PTwoSided | ValueType::Q => {
                Family::TwoSided
            }
            ValueType::U => Family::Statistic,
        }
    }

    /// Whether the value requires the normal approximation (and therefore a nonzero variance)
    pub fn needs_variance(&self) -> bool {
        self.family().tail().is_some()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::PGreater => "p.greater",
            ValueType::PLess => "p.less",
            ValueType::PTwoSided => "p.two.sided",
            ValueType::U => "U",
            ValueType::AbsLog10PGreater => "abs.log10.p.greater",
            ValueType::Log10PLess => "log10.p.less",
            ValueType::AbsLog10PTwoSided => "abs.log10.p.two.sided",
            ValueType::Q => "Q",
        }
    }
}

impl TryFrom<i32> for ValueType {
    type Error = WmwError;

    fn try_from(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| ValueType::ALL.get(idx).copied())
            .ok_or_else(|| WmwError::InvalidValueType(code.to_string()))
    }
}

impl From<ValueType> for i32 {
    fn from(value_type: ValueType) -> i32 {
        match value_type {
            ValueType::PGreater => 0,
            ValueType::PLess => 1,
            ValueType::PTwoSided => 2,
            ValueType::U => 3,
            ValueType::AbsLog10PGreater => 4,
            ValueType::Log10PLess => 5,
            ValueType::AbsLog10PTwoSided => 6,
            ValueType::Q => 7,
        }
    }
}

impl FromStr for ValueType {
    type Err = WmwError;

    fn from_str(s: &str) -> Result<Self> {
        ValueType::ALL
            .iter()
            .find(|v| v.name() == s)
            .copied()
            .ok_or_else(|| WmwError::InvalidValueType(s.to_string()))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod testing {
    use super::{Family, ValueType};
    use crate::{error::WmwError, normal::Tail};

    #[test]
    fn test_integer_codes() {
        for (code, value_type) in ValueType::ALL.iter().enumerate() {
            let code = code as i32;
            assert_eq!(ValueType::try_from(code).unwrap(), *value_type);
            assert_eq!(i32::from(*value_type), code);
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(
            ValueType::try_from(9i32),
            Err(WmwError::InvalidValueType("9".to_string()))
        );
        assert!(ValueType::try_from(-1i32).is_err());
    }

    #[test]
    fn test_names() {
        for value_type in ValueType::ALL {
            let parsed: ValueType = value_type.to_string().parse().unwrap();
            assert_eq!(parsed, value_type);
        }
        assert!("p.left".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_family() {
        assert_eq!(ValueType::PGreater.family(), Family::Greater);
        assert_eq!(ValueType::Log10PLess.family(), Family::Less);
        assert_eq!(ValueType::Q.family(), Family::TwoSided);
        assert!(!ValueType::U.needs_variance());
        assert!(ValueType::AbsLog10PTwoSided.needs_variance());
    }

    #[test]
    fn test_family_tail() {
        assert_eq!(Family::Greater.tail(), Some(Tail::Lower));
        assert_eq!(Family::Less.tail(), Some(Tail::Upper));
        assert_eq!(Family::TwoSided.tail(), Some(Tail::Both));
        assert_eq!(ValueType::U.family().tail(), None);
    }
}
