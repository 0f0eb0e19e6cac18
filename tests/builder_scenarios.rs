/// End-to-end pricing scenarios driven through the session reducer
use flexi_plan::{
    catalog::{Catalog, OTT},
    error::PlanError,
    session::{Action, Session},
};
use std::sync::Arc;

fn session() -> Session {
    Session::new(Arc::new(Catalog::builtin()))
}

fn enable(category: &str, enabled: bool) -> Action {
    Action::SetEnabled {
        category: category.to_string(),
        enabled,
    }
}

#[test]
fn test_default_plan_total() {
    // Smart 299 + 50 GB (100) + Netflix 199 + Xbox 99 + 1 TB 149 + Fitness Basic 99
    let s = session();
    assert_eq!(s.total(), 945);

    let quote = s.quote();
    let active: Vec<&str> = quote.active_items().map(|i| i.category.as_str()).collect();
    assert_eq!(active, vec![OTT, "gaming", "cloud", "fitness"]);
}

#[test]
fn test_turning_ott_off() {
    let mut s = session();
    assert_eq!(s.apply(enable(OTT, false)).unwrap(), 746);
}

#[test]
fn test_switching_to_max() {
    let mut s = session();
    assert_eq!(s.apply(Action::SelectBase("max".to_string())).unwrap(), 1045);
}

#[test]
fn test_everything_off_is_base_plus_data() {
    let mut s = session();
    let keys: Vec<String> = s.catalog().categories.iter().map(|c| c.key.clone()).collect();
    for key in keys {
        s.apply(enable(&key, false)).unwrap();
    }
    assert_eq!(s.total(), 299 + 100);

    s.apply(Action::SetExtraData(0)).unwrap();
    assert_eq!(s.total(), 299);
}

#[test]
fn test_premium_build() {
    let mut s = session();
    let actions = vec![
        Action::SelectBase("max".to_string()),
        Action::SetExtraData(100),
        Action::SelectOption {
            category: "travel".to_string(),
            option: "intl3".to_string(),
        },
        enable("travel", true),
        Action::SelectOption {
            category: "gaming".to_string(),
            option: "psplus_extra".to_string(),
        },
    ];
    for action in actions {
        s.apply(action).unwrap();
    }

    // 399 + 200 + ott 199 + gaming 199 + travel 699 + cloud 149 + fitness 99
    assert_eq!(s.total(), 1944);
}

#[test]
fn test_spend_cap_is_display_only() {
    let mut s = session();
    assert_eq!(s.apply(Action::SetSpendCap(500)).unwrap(), 945);
    assert_eq!(s.apply(Action::SetSpendCap(3000)).unwrap(), 945);
    assert_eq!(s.config().spend_cap, 3000);

    // The cap is not enforced even when the total exceeds it
    s.apply(Action::SetSpendCap(500)).unwrap();
    s.apply(Action::SelectBase("max".to_string())).unwrap();
    assert!(s.total() > u64::from(s.config().spend_cap));
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let mut s = session();

    assert_eq!(
        s.apply(enable("music", true)).unwrap_err(),
        PlanError::InvalidCategory("music".to_string())
    );
    assert_eq!(
        s.apply(Action::SelectBase("299".to_string())).unwrap_err(),
        PlanError::InvalidBasePlan("299".to_string())
    );
    assert!(matches!(
        s.apply(Action::SelectOption {
            category: OTT.to_string(),
            option: "hulu".to_string(),
        }),
        Err(PlanError::InvalidSelection { .. })
    ));

    assert_eq!(s.total(), 945);
    assert!(!s.view().show_base_details);
}

#[test]
fn test_quote_serializes_to_json() {
    let quote = session().quote();
    let json = serde_json::to_value(&quote).unwrap();

    assert_eq!(json["total"], 945);
    assert_eq!(json["base"], "smart");
    assert_eq!(json["items"].as_array().unwrap().len(), 8);
}
