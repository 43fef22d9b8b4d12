//! Skill weights — even split of scoring weight across a profile's technical skills.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Weight assigned to one technical skill. Weights of a profile sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillWeight {
    pub skill: String,
    pub weight: f64,
}

/// Gives each unique skill a weight of 1/N, in order of first appearance.
/// An empty skill list yields no weights.
pub fn compute_skill_weights(skills: &[String]) -> Vec<SkillWeight> {
    let mut seen = HashSet::new();
    let unique: Vec<&String> = skills.iter().filter(|s| seen.insert(*s)).collect();

    if unique.is_empty() {
        return Vec::new();
    }

    let weight = 1.0 / unique.len() as f64;
    unique
        .into_iter()
        .map(|skill| SkillWeight {
            skill: skill.clone(),
            weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn total(weights: &[SkillWeight]) -> f64 {
        weights.iter().map(|w| w.weight).sum()
    }

    #[test]
    fn test_weights_are_even_and_sum_to_one() {
        for n in 1..=12 {
            let names: Vec<String> = (0..n).map(|i| format!("skill-{i}")).collect();
            let weights = compute_skill_weights(&names);

            assert_eq!(weights.len(), n);
            for w in &weights {
                assert!((w.weight - 1.0 / n as f64).abs() < 1e-12);
            }
            assert!((total(&weights) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_empty_skill_list_yields_no_weights() {
        assert!(compute_skill_weights(&[]).is_empty());
    }

    #[test]
    fn test_duplicates_collapse_keeping_first_order() {
        let weights = compute_skill_weights(&skills(&["Python", "Django", "Python", "AWS"]));

        let names: Vec<&str> = weights.iter().map(|w| w.skill.as_str()).collect();
        assert_eq!(names, vec!["Python", "Django", "AWS"]);
        assert!((weights[0].weight - 1.0 / 3.0).abs() < 1e-12);
        assert!((total(&weights) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_skill_gets_full_weight() {
        let weights = compute_skill_weights(&skills(&["Python"]));
        assert_eq!(
            weights,
            vec![SkillWeight {
                skill: "Python".to_string(),
                weight: 1.0
            }]
        );
    }
}
