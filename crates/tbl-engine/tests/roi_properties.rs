//! Property tests for the ROI calculator

use proptest::prelude::*;
use tbl_common::{
    CommonParameters, EmployerBrand, EnvironmentalInputs, FinancialInputs, ProjectData,
    SocialInputs, TurnoverComposition, TurnoverMetrics,
};
use tbl_engine::roi::{compute_project, compute_roi, social_value_tokens};

fn amount() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

fn financial_strategy() -> impl Strategy<Value = FinancialInputs> {
    (amount(), amount(), amount(), amount(), amount()).prop_map(
        |(operational_efficiencies, cost_reductions, revenue_growth, initial_investment, maintenance_costs)| {
            FinancialInputs {
                operational_efficiencies,
                cost_reductions,
                revenue_growth,
                initial_investment,
                maintenance_costs,
            }
        },
    )
}

fn environmental_strategy() -> impl Strategy<Value = EnvironmentalInputs> {
    (amount(), amount(), 0.0f64..100.0, amount(), amount(), amount()).prop_map(
        |(energy, water, waste, scope12, scope3, green_profit)| {
            let mut env = EnvironmentalInputs::default();
            env.energy.reduction = energy;
            env.water.reduction = water;
            env.waste.reduction = waste;
            env.scope1_and_2.reduction = scope12;
            env.scope3.reduction = scope3;
            env.brand_margin.green_products.profit_impact = green_profit;
            env
        },
    )
}

fn social_strategy() -> impl Strategy<Value = SocialInputs> {
    (amount(), 0.0f64..40.0, 0.0f64..30.0, 0.0f64..30.0, amount()).prop_map(
        |(turnover_cost, satisfaction, career, management, project_benefits)| SocialInputs {
            turnover: TurnoverMetrics {
                total_turnover_cost: turnover_cost,
                ..Default::default()
            },
            turnover_composition: TurnoverComposition {
                employee_satisfaction_impact: satisfaction,
                career_development_impact: career,
                management_satisfaction_impact: management,
            },
            employer_brand: EmployerBrand {
                social_project_benefits: project_benefits,
                revenue_impact: 0.0,
            },
            ..Default::default()
        },
    )
}

fn common_strategy() -> impl Strategy<Value = CommonParameters> {
    (0.0f64..30.0, 0u32..=30).prop_map(|(rate, period)| CommonParameters::new(rate, period))
}

fn data_strategy() -> impl Strategy<Value = ProjectData> {
    (
        financial_strategy(),
        environmental_strategy(),
        social_strategy(),
        common_strategy(),
    )
        .prop_map(|(financial, environmental, social, common)| ProjectData {
            financial,
            environmental,
            social,
            common,
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_yearly_sequences_span_projection(data in data_strategy()) {
        let results = compute_project(&data);
        let years = data.common.projection_period as usize;

        prop_assert_eq!(results.profit.yearly_flow.len(), years);
        prop_assert_eq!(results.planet.yearly_impact.len(), years);
        prop_assert_eq!(results.people.yearly_impact.len(), years);
    }

    #[test]
    fn prop_yearly_sequences_are_flat(data in data_strategy()) {
        let results = compute_project(&data);

        for window in results.profit.yearly_flow.windows(2) {
            prop_assert_eq!(window[0], window[1]);
        }
        for window in results.planet.yearly_impact.windows(2) {
            prop_assert_eq!(window[0], window[1]);
        }
        for window in results.people.yearly_impact.windows(2) {
            prop_assert_eq!(window[0], window[1]);
        }
    }

    #[test]
    fn prop_zero_investment_yields_zero_ratios(mut data in data_strategy()) {
        data.financial.initial_investment = 0.0;
        let results = compute_project(&data);

        prop_assert_eq!(results.profit.roi, 0.0);
        prop_assert_eq!(results.total_roi, 0.0);
    }

    #[test]
    fn prop_social_tokens_are_floored(data in data_strategy()) {
        let results = compute_project(&data);
        let savings = results.people.turnover_savings;
        let tokens = results.people.social_value_tokens;

        prop_assert_eq!(tokens, (savings / 1000.0).floor() as i64);
        prop_assert_eq!(tokens, social_value_tokens(savings));
        prop_assert!(tokens >= 0);
    }

    #[test]
    fn prop_payback_within_horizon(data in data_strategy()) {
        let results = compute_project(&data);
        let payback = results.profit.payback_period;

        prop_assert!(payback >= 0.0);
        prop_assert!(payback <= f64::from(data.common.projection_period));
        prop_assert_eq!(payback, payback.trunc());
    }

    #[test]
    fn prop_calculation_is_deterministic(data in data_strategy()) {
        let first = compute_project(&data);
        let second = compute_roi(&data.financial, &data.environmental, &data.social, &data.common);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.total_roi.to_bits(), second.total_roi.to_bits());
        prop_assert_eq!(first.discounted_roi.to_bits(), second.discounted_roi.to_bits());
        prop_assert_eq!(first.profit.npv.to_bits(), second.profit.npv.to_bits());
    }

    #[test]
    fn prop_discounted_roi_bounded_by_undiscounted(data in data_strategy()) {
        let discounted = compute_project(&data).discounted_roi;

        let mut undiscounted = data;
        undiscounted.common.discount_rate = 0.0;
        let ceiling = compute_project(&undiscounted).discounted_roi;

        prop_assert!(discounted <= ceiling || close(discounted, ceiling),
            "discounted {} above rate-0 value {}", discounted, ceiling);
    }

    #[test]
    fn prop_discounted_roi_non_increasing_in_rate(
        data in data_strategy(),
        low in 0.0f64..15.0,
        extra in 0.0f64..15.0,
    ) {
        let mut at_low = data;
        at_low.common.discount_rate = low;
        let mut at_high = data;
        at_high.common.discount_rate = low + extra;

        let low_roi = compute_project(&at_low).discounted_roi;
        let high_roi = compute_project(&at_high).discounted_roi;

        prop_assert!(high_roi <= low_roi || close(high_roi, low_roi),
            "rate {} gave {}, rate {} gave {}", low, low_roi, low + extra, high_roi);
    }

    #[test]
    fn prop_npv_falls_with_rate_for_profitable_flows(
        data in data_strategy(),
        extra in 0.5f64..10.0,
    ) {
        // NPV = PV(F) - I - PV(M); with F - M >= 0 it shrinks as the rate grows
        prop_assume!(data.financial.annual_net_flow() >= data.financial.maintenance_costs);
        prop_assume!(data.common.projection_period > 0);

        let mut at_high = data;
        at_high.common.discount_rate = data.common.discount_rate + extra;

        let low_npv = compute_project(&data).profit.npv;
        let high_npv = compute_project(&at_high).profit.npv;
        prop_assert!(high_npv <= low_npv || close(high_npv, low_npv));
    }
}
