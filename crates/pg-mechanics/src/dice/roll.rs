//! The outcome of rolling a dice expression.

use serde::{Deserialize, Serialize};

/// Every face rolled, and the faces that count toward the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Face values in roll order.
    pub rolled: Vec<u32>,
    /// Counted face values. Highest first when any were dropped.
    pub kept: Vec<u32>,
}

impl RollResult {
    /// Build a result, keeping the `keep` highest faces (all when `None`).
    pub fn keeping(rolled: Vec<u32>, keep: Option<usize>) -> Self {
        let kept = match keep {
            Some(keep) if keep < rolled.len() => {
                let mut sorted = rolled.clone();
                sorted.sort_unstable_by(|a, b| b.cmp(a));
                sorted.truncate(keep);
                sorted
            }
            _ => rolled.clone(),
        };
        Self { rolled, kept }
    }

    /// Sum of the kept faces, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.kept.iter().fold(0, |sum, face| sum.saturating_add(*face))
    }

    /// Faces that were rolled but not kept, highest first.
    pub fn dropped(&self) -> Vec<u32> {
        if self.kept.len() >= self.rolled.len() {
            return Vec::new();
        }
        let mut sorted = self.rolled.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.split_off(self.kept.len())
    }

    /// Number of kept faces.
    pub fn count(&self) -> usize {
        self.kept.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |faces: &[u32]| {
            faces
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "[{}]", join(&self.kept))?;
        let dropped = self.dropped();
        if !dropped.is_empty() {
            write!(f, " (dropped {})", join(&dropped))?;
        }
        write!(f, " = {}", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_everything_by_default() {
        let r = RollResult::keeping(vec![5, 2], None);
        assert_eq!(r.kept, vec![5, 2]);
        assert_eq!(r.total(), 7);
        assert!(r.dropped().is_empty());
        assert_eq!(r.to_string(), "[5, 2] = 7");
    }

    #[test]
    fn drop_lowest() {
        let r = RollResult::keeping(vec![2, 6, 1, 4], Some(3));
        assert_eq!(r.kept, vec![6, 4, 2]);
        assert_eq!(r.total(), 12);
        assert_eq!(r.dropped(), vec![1]);
        assert_eq!(r.rolled, vec![2, 6, 1, 4]);
        assert_eq!(r.to_string(), "[6, 4, 2] (dropped 1) = 12");
    }

    #[test]
    fn keep_more_than_rolled_keeps_all() {
        let r = RollResult::keeping(vec![3, 3], Some(5));
        assert_eq!(r.total(), 6);
        assert_eq!(r.count(), 2);
    }

    #[test]
    fn empty() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
        assert_eq!(r.to_string(), "[] = 0");
    }
}
