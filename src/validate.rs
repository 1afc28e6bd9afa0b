use std::collections::HashMap;

use crate::types::{ConflictError, ResolvedRule};

/// Check that no base type is targeted by more than one rule.
///
/// # Errors
///
/// Returns [`ConflictError`] for the first base type claimed a second time,
/// naming the line of the rule that claimed it first.
pub fn validate(rules: &[ResolvedRule]) -> Result<(), ConflictError> {
    let mut claimed: HashMap<&str, usize> = HashMap::new();
    for rule in rules {
        // A rule's own base types are already duplicate free.
        for base in rule.targets() {
            if let Some(first_line) = claimed.insert(base, rule.source_line) {
                return Err(ConflictError {
                    base_type: base.to_owned(),
                    first_line,
                    second_line: rule.source_line,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verb;

    fn rule(line: usize, bases: &[&str]) -> ResolvedRule {
        let mut rule = ResolvedRule::new(line, Verb::Show);
        rule.base_types = Some(bases.iter().map(|b| (*b).to_owned()).collect());
        rule
    }

    #[test]
    fn disjoint_rules_pass() {
        let rules = [rule(1, &["cap", "skp"]), rule(4, &["hlm"])];
        assert!(validate(&rules).is_ok());
    }

    #[test]
    fn unconstrained_rules_never_conflict() {
        let rules = [ResolvedRule::new(1, Verb::Show), ResolvedRule::new(3, Verb::Hide)];
        assert!(validate(&rules).is_ok());
    }

    #[test]
    fn duplicate_claim_names_both_lines() {
        let rules = [rule(1, &["cap"]), rule(4, &["hlm"]), rule(7, &["xap", "cap"])];
        assert_eq!(
            validate(&rules),
            Err(ConflictError {
                base_type: "cap".into(),
                first_line: 1,
                second_line: 7,
            })
        );
    }

    #[test]
    fn empty_rule_set_passes() {
        assert!(validate(&[]).is_ok());
    }
}
