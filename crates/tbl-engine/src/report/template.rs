//! Deterministic report used when no generated text is available

use tbl_common::AnalysisInput;

use crate::format::{format_fixed, format_number};

/// Capital-efficiency wording for a payback period
pub fn payback_rating(payback_years: f64) -> &'static str {
    if payback_years <= 3.0 {
        "excellent"
    } else if payback_years <= 5.0 {
        "good"
    } else {
        "moderate"
    }
}

/// Render the fallback strategic analysis report
pub fn render_template(input: &AnalysisInput) -> String {
    let results = &input.results;
    let profit = &results.profit;
    let planet = &results.planet;
    let people = &results.people;

    format!(
        r#"# STRATEGIC ANALYSIS REPORT: {upper_name}

## EXECUTIVE SUMMARY

This analysis reveals a comprehensive view of your organization's impact across financial, environmental, and social dimensions. With a total ROI of {total_roi}% and a discounted ROI of {discounted_roi}%, your initiative demonstrates strong value creation potential across all three bottom lines.

## KEY FINDINGS ANALYSIS

### Financial Performance
The financial dimension shows an ROI of {roi}% with a Net Present Value of ${npv}. The payback period of {payback} years indicates {rating} capital efficiency.

### Environmental Impact
Your environmental initiatives have generated {co2e} CO2e tokens, representing significant environmental value creation of ${environmental_value}. Additionally, brand margin benefits from environmental initiatives contribute ${planet_brand} annually.

### Social Value Creation
The people dimension contributes {social_tokens} Social Value Tokens through improved employee satisfaction and reduced turnover. Direct turnover savings amount to ${turnover_savings}, with additional brand benefits of ${people_brand}.

## INTERDEPENDENCIES & SYNERGIES

The analysis reveals strong synergies between environmental and social initiatives, both contributing to enhanced brand value and customer loyalty. Environmental certifications and social responsibility programs create multiplicative effects on brand margin benefits.

## STRATEGIC RECOMMENDATIONS

1. Accelerate environmental initiatives with highest CO2e token generation potential
2. Integrate employee satisfaction programs with sustainability goals
3. Leverage brand margin benefits through targeted marketing of sustainability achievements
4. Establish measurement systems for ongoing TBL performance tracking
5. Consider expanding successful initiatives based on demonstrated ROI performance

## IMPLEMENTATION PRIORITIES

Priority 1: Focus on initiatives with payback periods under 3 years
Priority 2: Scale environmental programs generating highest CO2e token values
Priority 3: Enhance employee engagement programs showing turnover reduction impact
Priority 4: Develop integrated reporting systems for continuous TBL monitoring

## CONCLUSION

Your Hybrid TBL ROI analysis demonstrates that sustainable business practices create measurable value across all three dimensions. The strong financial returns, combined with meaningful environmental and social impacts, position your organization for long-term competitive advantage and stakeholder value creation.

This analysis provides a foundation for strategic decision-making and resource allocation that optimizes returns across Profit, People, and Planet dimensions."#,
        upper_name = input.project.name.to_uppercase(),
        total_roi = format_fixed(results.total_roi, 2),
        discounted_roi = format_fixed(results.discounted_roi, 2),
        roi = format_fixed(profit.roi, 2),
        npv = format_number(profit.npv),
        payback = format_fixed(profit.payback_period, 1),
        rating = payback_rating(profit.payback_period),
        co2e = format_number(planet.co2e_tokens),
        environmental_value = format_number(planet.environmental_value),
        planet_brand = format_number(planet.brand_margin_benefits),
        social_tokens = format_number(people.social_value_tokens as f64),
        turnover_savings = format_number(people.turnover_savings),
        people_brand = format_number(people.brand_margin_benefits),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbl_common::{Project, ProjectData, ProjectInfo, RoiResults};

    fn input_with_payback(payback: f64) -> AnalysisInput {
        let project = Project::new("Water Reuse", "Greywater loop", None);
        let mut results = RoiResults::default();
        results.total_roi = 975.0;
        results.discounted_roi = 180.456;
        results.profit.roi = 225.0;
        results.profit.npv = 23_919.8;
        results.profit.payback_period = payback;
        results.planet.co2e_tokens = 500.0;
        results.planet.environmental_value = 25_000.0;
        results.people.social_value_tokens = 4;
        results.people.turnover_savings = 4_500.0;

        AnalysisInput {
            results,
            inputs: ProjectData::default(),
            project: ProjectInfo::from(&project),
        }
    }

    #[test]
    fn test_payback_rating_thresholds() {
        assert_eq!(payback_rating(2.0), "excellent");
        assert_eq!(payback_rating(3.0), "excellent");
        assert_eq!(payback_rating(4.0), "good");
        assert_eq!(payback_rating(5.0), "good");
        assert_eq!(payback_rating(6.0), "moderate");
    }

    #[test]
    fn test_template_figures() {
        let report = render_template(&input_with_payback(2.0));

        assert!(report.starts_with("# STRATEGIC ANALYSIS REPORT: WATER REUSE"));
        assert!(report.contains("total ROI of 975.00% and a discounted ROI of 180.46%"));
        assert!(report.contains("Net Present Value of $23,919.8"));
        assert!(report.contains("payback period of 2.0 years indicates excellent capital efficiency"));
        assert!(report.contains("generated 500 CO2e tokens"));
        assert!(report.contains("value creation of $25,000"));
        assert!(report.contains("contributes 4 Social Value Tokens"));
        assert!(report.contains("savings amount to $4,500"));
    }

    #[test]
    fn test_template_rounds_halves_up() {
        let mut input = input_with_payback(2.25);
        input.results.profit.roi = 0.125;

        let report = render_template(&input);
        assert!(report.contains("an ROI of 0.13%"));
        assert!(report.contains("payback period of 2.3 years"));
    }

    #[test]
    fn test_template_is_deterministic() {
        let input = input_with_payback(7.0);
        assert_eq!(render_template(&input), render_template(&input));
        assert!(render_template(&input).contains("indicates moderate capital efficiency"));
    }
}
