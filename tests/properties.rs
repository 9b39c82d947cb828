//! Property tests for checkout invariants.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use tool_rental::checkout::checkout;
use tool_rental::error::RentalError;
use tool_rental::models::{Tool, ToolType};

fn any_tool() -> impl Strategy<Value = Tool> {
    prop_oneof![
        Just(Tool::with_type("LADW", ToolType::Ladder, "Werner")),
        Just(Tool::with_type("CHNS", ToolType::Chainsaw, "Stihl")),
        Just(Tool::with_type("JAKD", ToolType::Jackhammer, "DeWalt")),
    ]
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~50 years
    (0u64..18_250).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn charge_days_never_exceed_rental_days(
        tool in any_tool(),
        days in 1i64..400,
        discount in 0i64..=100,
        date in any_date(),
    ) {
        let agreement = checkout(&tool, days, discount, date).unwrap();
        prop_assert!(i64::from(agreement.charge_days()) <= days);
    }

    #[test]
    fn due_date_is_checkout_plus_rental_days(
        tool in any_tool(),
        days in 1i64..400,
        date in any_date(),
    ) {
        let agreement = checkout(&tool, days, 0, date).unwrap();
        prop_assert_eq!(
            agreement.due_date(),
            date.checked_add_days(Days::new(days as u64)).unwrap()
        );
    }

    #[test]
    fn amounts_have_two_decimal_places_and_reconcile(
        tool in any_tool(),
        days in 1i64..400,
        discount in 0i64..=100,
        date in any_date(),
    ) {
        let agreement = checkout(&tool, days, discount, date).unwrap();
        prop_assert_eq!(agreement.discount_amount().scale(), 2);
        prop_assert_eq!(agreement.final_charge().scale(), 2);
        prop_assert_eq!(
            agreement.final_charge(),
            agreement.pre_discount_charge() - agreement.discount_amount()
        );
        prop_assert!(agreement.final_charge() >= Decimal::ZERO);
    }

    #[test]
    fn weekend_billing_ladder_bills_at_least_jackhammer(
        days in 1i64..120,
        date in any_date(),
    ) {
        let ladder = Tool::with_type("LADW", ToolType::Ladder, "Werner");
        let jackhammer = Tool::with_type("JAKD", ToolType::Jackhammer, "DeWalt");
        let ladder_days = checkout(&ladder, days, 0, date).unwrap().charge_days();
        let jackhammer_days = checkout(&jackhammer, days, 0, date).unwrap().charge_days();
        prop_assert!(ladder_days >= jackhammer_days);
    }

    #[test]
    fn non_positive_rental_days_rejected(
        tool in any_tool(),
        days in -1000i64..1,
        date in any_date(),
    ) {
        prop_assert_eq!(
            checkout(&tool, days, 10, date).unwrap_err(),
            RentalError::InvalidRentalDays { days }
        );
    }

    #[test]
    fn out_of_range_discount_rejected(
        tool in any_tool(),
        discount in prop_oneof![-1000i64..0, 101i64..1000],
        date in any_date(),
    ) {
        prop_assert_eq!(
            checkout(&tool, 5, discount, date).unwrap_err(),
            RentalError::InvalidDiscountPercent { percent: discount }
        );
    }
}
