//! Analysis prompt for the text-generation API

use chrono::{NaiveDate, Utc};
use tbl_common::AnalysisInput;

use crate::format::{format_fixed, format_number};

/// Build the strategic-analysis prompt dated today
pub fn build_prompt(input: &AnalysisInput) -> String {
    build_prompt_at(input, Utc::now().date_naive())
}

/// Build the strategic-analysis prompt with an explicit analysis date
pub fn build_prompt_at(input: &AnalysisInput, date: NaiveDate) -> String {
    let results = &input.results;
    let inputs = &input.inputs;
    let project = &input.project;
    let name = &project.name;

    let description = if project.description.is_empty() {
        "No description provided"
    } else {
        project.description.as_str()
    };
    let created_by = project.created_by.as_deref().unwrap_or("Unknown");

    format!(
        r#"
You are a strategic business analyst specializing in Triple Bottom Line (TBL) analysis and sustainable business practices.

Generate a comprehensive strategic analysis report for the project "{name}" based on the following Hybrid TBL ROI calculation results:

PROJECT INFORMATION:
- Project Name: {name}
- Description: {description}
- Created by: {created_by}
- Analysis Date: {date}

FINANCIAL METRICS:
- Financial ROI: {roi}%
- Net Present Value: ${npv}
- Payback Period: {payback} years
- Total ROI: {total_roi}%
- Discounted ROI: {discounted_roi}%

ENVIRONMENTAL METRICS:
- CO2e Tokens Generated: {co2e}
- Environmental Value: ${environmental_value}
- Brand Margin Benefits (Planet): ${planet_brand}

SOCIAL METRICS:
- Social Value Tokens: {social_tokens}
- Turnover Savings: ${turnover_savings}
- Brand Margin Benefits (People): ${people_brand}

INPUT CONTEXT:
- Initial Investment: ${investment}
- Projection Period: {period} years
- Discount Rate: {discount_rate}%
- Energy Reduction Target: {energy_reduction} kWh
- Employee Turnover Rate Context: {employees_left}/{fte_beginning} employees

Please provide a detailed strategic analysis report with the following structure and formatting:

# STRATEGIC ANALYSIS REPORT: {upper_name}

## EXECUTIVE SUMMARY

## KEY FINDINGS ANALYSIS
### Financial Performance
### Environmental Impact
### Social Value Creation

## INTERDEPENDENCIES & SYNERGIES

## STRENGTHS & OPPORTUNITIES

## CHALLENGES & RISKS

## STRATEGIC RECOMMENDATIONS

## IMPLEMENTATION PRIORITIES

## CONCLUSION

FORMATTING REQUIREMENTS:
- Use clear headings with # and ## markdown formatting
- Include bullet points and numbered lists where appropriate
- Write in professional, analytical tone
- Provide specific, data-driven recommendations
- Reference the project name throughout the analysis
- Include quantitative insights from the provided metrics

Focus on:
- Actionable insights and strategic recommendations
- Interdependencies between the three dimensions
- Long-term value creation opportunities
- Risk mitigation strategies
- Implementation guidance

The report should be suitable for executive leadership and board presentations, with specific focus on the "{name}" project context.
"#,
        date = date.format("%-m/%-d/%Y"),
        roi = format_fixed(results.profit.roi, 2),
        npv = format_number(results.profit.npv),
        payback = format_fixed(results.profit.payback_period, 1),
        total_roi = format_fixed(results.total_roi, 2),
        discounted_roi = format_fixed(results.discounted_roi, 2),
        co2e = format_number(results.planet.co2e_tokens),
        environmental_value = format_number(results.planet.environmental_value),
        planet_brand = format_number(results.planet.brand_margin_benefits),
        social_tokens = format_number(results.people.social_value_tokens as f64),
        turnover_savings = format_number(results.people.turnover_savings),
        people_brand = format_number(results.people.brand_margin_benefits),
        investment = format_number(inputs.financial.initial_investment),
        period = inputs.common.projection_period,
        discount_rate = inputs.common.discount_rate,
        energy_reduction = format_number(inputs.environmental.energy.reduction),
        employees_left = inputs.social.turnover.employees_left,
        fte_beginning = inputs.social.turnover.fte_beginning,
        upper_name = name.to_uppercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbl_common::{Project, ProjectData, ProjectInfo, RoiResults};

    fn sample_input() -> AnalysisInput {
        let mut project = Project::new("Green Logistics", "", Some("maria".to_string()));
        project.id = "p-1".to_string();

        let mut inputs = ProjectData::default();
        inputs.financial.initial_investment = 250_000.0;
        inputs.environmental.energy.reduction = 12_500.0;
        inputs.social.turnover.employees_left = 12.0;
        inputs.social.turnover.fte_beginning = 150.0;

        let mut results = RoiResults::default();
        results.profit.roi = 42.123;
        results.profit.npv = 18_250.5;
        results.profit.payback_period = 3.0;
        results.planet.co2e_tokens = 6_250.0;
        results.people.social_value_tokens = 12;

        AnalysisInput {
            results,
            inputs,
            project: ProjectInfo::from(&project),
        }
    }

    #[test]
    fn test_prompt_quotes_metrics() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let prompt = build_prompt_at(&sample_input(), date);

        assert!(prompt.contains("project \"Green Logistics\""));
        assert!(prompt.contains("- Analysis Date: 3/7/2026"));
        assert!(prompt.contains("- Financial ROI: 42.12%"));
        assert!(prompt.contains("- Net Present Value: $18,250.5"));
        assert!(prompt.contains("- Payback Period: 3.0 years"));
        assert!(prompt.contains("- CO2e Tokens Generated: 6,250"));
        assert!(prompt.contains("- Initial Investment: $250,000"));
        assert!(prompt.contains("- Projection Period: 5 years"));
        assert!(prompt.contains("- Discount Rate: 8%"));
        assert!(prompt.contains("- Energy Reduction Target: 12,500 kWh"));
        assert!(prompt.contains("- Employee Turnover Rate Context: 12/150 employees"));
        assert!(prompt.contains("# STRATEGIC ANALYSIS REPORT: GREEN LOGISTICS"));
    }

    #[test]
    fn test_prompt_placeholders_for_missing_context() {
        let mut input = sample_input();
        input.project.created_by = None;
        let prompt = build_prompt_at(&input, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        assert!(prompt.contains("- Description: No description provided"));
        assert!(prompt.contains("- Created by: Unknown"));
    }
}
