use super::*;
use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

/// Tests reading the configuration with no variables set.
///
/// Expected: Ok with abort and keep policies
#[test]
fn unset_variables_use_defaults() {
    let config = Config::from_lookup(lookup(&[])).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.unknown_participant, UnknownParticipantPolicy::Abort);
    assert_eq!(config.unresolved_sweep, UnresolvedSweepPolicy::Keep);
}

/// Tests reading both policies, case- and whitespace-insensitively.
///
/// Expected: Ok with skip and remove policies
#[test]
fn reads_both_policies() {
    let config = Config::from_lookup(lookup(&[
        (UNKNOWN_PARTICIPANT_VAR, "Skip"),
        (UNRESOLVED_SWEEP_VAR, " remove "),
    ]))
    .unwrap();

    assert_eq!(config.unknown_participant, UnknownParticipantPolicy::Skip);
    assert_eq!(config.unresolved_sweep, UnresolvedSweepPolicy::Remove);
}

/// Tests a variable set to a value the policy does not accept.
///
/// Expected: Err(InvalidEnvVar) naming the variable and value
#[test]
fn rejects_unknown_values() {
    let result = Config::from_lookup(lookup(&[(UNRESOLVED_SWEEP_VAR, "purge")]));

    assert_eq!(
        result,
        Err(ConfigError::InvalidEnvVar {
            name: UNRESOLVED_SWEEP_VAR.to_string(),
            value: "purge".to_string(),
        })
    );
}
