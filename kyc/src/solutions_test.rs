use super::*;
use serde_json::json;

#[test]
fn every_solution_belongs_to_one_category() {
    let total: usize = SolutionCategory::ALL.iter().map(|c| c.solutions().count()).sum();
    assert_eq!(total, Solution::ALL.len());
}

#[test]
fn premium_add_ons_has_three_entries_in_order() {
    let items: Vec<Solution> = SolutionCategory::PremiumAddOns.solutions().collect();
    assert_eq!(items, vec![Solution::ExchangeApi, Solution::MobileApps, Solution::LiveDealer]);
}

#[test]
fn default_selection_is_unsatisfied() {
    let selection = SolutionsSelection::default();
    assert!(!selection.any());
    assert_eq!(selection.labels(), "");
}

#[test]
fn set_then_is_selected_round_trips_each_flag() {
    for solution in Solution::ALL {
        let mut selection = SolutionsSelection::default();
        selection.set(solution, true);
        assert!(selection.is_selected(solution));
        assert_eq!(selection.selected().count(), 1, "{solution:?}");
        selection.set(solution, false);
        assert!(!selection.any());
    }
}

#[test]
fn labels_follow_declaration_order_not_toggle_order() {
    let mut selection = SolutionsSelection::default();
    selection.set(Solution::DevTeam, true);
    selection.set(Solution::WhiteLabel, true);
    selection.set(Solution::FraudDetection, true);
    assert_eq!(
        selection.labels(),
        "White-Label Casino Platform, AI-Powered Fraud Detection, Dedicated Development Team"
    );
}

#[test]
fn serializes_with_wire_flag_names() {
    let mut selection = SolutionsSelection::default();
    selection.set(Solution::ExchangeApi, true);
    let value = serde_json::to_value(selection).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 12);
    for solution in Solution::ALL {
        assert!(object.contains_key(solution.key()), "{}", solution.key());
    }
    assert_eq!(value["exchangeApi"], json!(true));
    assert_eq!(value["whiteLabel"], json!(false));
}

#[test]
fn missing_flags_deserialize_as_false() {
    let selection: SolutionsSelection = serde_json::from_value(json!({ "liveDealer": true })).unwrap();
    assert!(selection.is_selected(Solution::LiveDealer));
    assert_eq!(selection.selected().count(), 1);
}
