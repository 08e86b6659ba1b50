//! Column layouts for table-based tests

use classic_core::Error as CoreError;

use crate::Result;

/// Layout of the scores handed to Cronbach's alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemLayout<'a> {
    /// Every column is an item, every row a subject
    #[default]
    Wide,

    /// One row per (subject, item) score
    Long {
        items: &'a str,
        scores: &'a str,
        subject: &'a str,
    },
}

impl<'a> ItemLayout<'a> {
    /// Long layout from the three column names
    pub fn long(items: &'a str, scores: &'a str, subject: &'a str) -> Self {
        Self::Long {
            items,
            scores,
            subject,
        }
    }
}

/// Design of a Hotelling T-squared test on a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtestDesign<'a> {
    /// Mean vector of all rows against zero
    #[default]
    OneSample,

    /// Rows split by a two-level group column into independent samples
    Independent { group: &'a str },

    /// Rows split by a two-level group column and paired in row order
    Paired { group: &'a str },
}

impl<'a> TtestDesign<'a> {
    /// Design from an optional group column and a paired flag
    pub fn from_parts(group: Option<&'a str>, paired: bool) -> Result<Self> {
        match (group, paired) {
            (None, false) => Ok(Self::OneSample),
            (None, true) => Err(CoreError::InvalidArgument(
                "A paired test requires a group column".to_string(),
            )
            .into()),
            (Some(group), false) => Ok(Self::Independent { group }),
            (Some(group), true) => Ok(Self::Paired { group }),
        }
    }

    /// Column splitting the rows into two samples, if any
    pub fn group(&self) -> Option<&'a str> {
        match self {
            Self::OneSample => None,
            Self::Independent { group } | Self::Paired { group } => Some(*group),
        }
    }
}

/// Resolve a required column name
pub(crate) fn required<'a>(name: Option<&'a str>, role: &str) -> Result<&'a str> {
    name.ok_or_else(|| {
        CoreError::InvalidArgument(format!("The {role} column must be specified")).into()
    })
}

/// Check that no column plays two roles
pub(crate) fn distinct_roles(roles: &[(&str, &str)]) -> Result<()> {
    for (i, (role, column)) in roles.iter().enumerate() {
        if let Some((other, _)) = roles[..i].iter().find(|(_, c)| c == column) {
            return Err(CoreError::DesignViolation(format!(
                "Column '{column}' cannot be used as both {other} and {role}"
            ))
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_from_parts() {
        assert_eq!(TtestDesign::from_parts(None, false).unwrap(), TtestDesign::OneSample);
        assert_eq!(
            TtestDesign::from_parts(Some("g"), true).unwrap(),
            TtestDesign::Paired { group: "g" }
        );
        assert!(TtestDesign::from_parts(None, true).unwrap_err().is_invalid_argument());
        assert_eq!(TtestDesign::Independent { group: "g" }.group(), Some("g"));
    }

    #[test]
    fn test_distinct_roles() {
        let roles = [("targets", "wine"), ("raters", "judge"), ("scores", "score")];
        assert!(distinct_roles(&roles).is_ok());
        let err = distinct_roles(&[("targets", "wine"), ("raters", "wine")]).unwrap_err();
        assert!(err.is_design_violation());
        assert!(err.to_string().contains("targets"));
    }

    #[test]
    fn test_required() {
        assert_eq!(required(Some("x"), "scores").unwrap(), "x");
        assert!(required(None, "scores").unwrap_err().is_invalid_argument());
    }
}
