//! Prompt construction for strategic report generation.

use std::fmt::Write;

use crate::ports::ReportContext;

/// Persona and output contract sent as the system instruction.
pub const REPORT_SYSTEM_PROMPT: &str = "\
You are a senior partner at a leading management consultancy, specializing in \
data and AI strategy. You write concise, authoritative, insight-led guidance \
for executive audiences. You always answer with a single JSON document and \
nothing else.";

/// JSON shape the model must produce.
const REPORT_SHAPE: &str = r#"{
  "executiveSummary": string,
  "keyTrends": [{"trend": string, "impact": string, "icon": string (optional)}],
  "topChallenges": [{"challenge": string, "description": string, "severity": integer 0-100}],
  "strategicActions": [{"title": string, "description": string,
                        "type": "People" | "Process" | "Technology" | "Strategy",
                        "keySteps": [string], "relatedAreaIds": [string]}],
  "roadmap": [{"phaseName": string, "duration": string, "focus": string,
               "keyDeliverables": [string], "relatedAreaIds": [string]}],
  "riskAssessment": {"probability": string, "riskFactors": [string]},
  "responsibleAI": {"potentialBiases": [string], "mitigationStrategies": [string]}
}"#;

/// Builds the user prompt describing the client and the task.
///
/// Rated areas are listed highest priority first so the model weights
/// them accordingly; ties are ordered by id for a stable prompt.
pub fn build_report_prompt(context: &ReportContext) -> String {
    let mut areas: Vec<_> = context.rated_areas.iter().collect();
    areas.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));

    let mut prompt = String::new();
    let _ = writeln!(prompt, "Industry: {}", context.industry);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Client profile:");
    let _ = writeln!(
        prompt,
        "- Current maturity: Level {} ({}) - {}",
        context.current_level.level.value(),
        context.current_level.title,
        context.current_level.subtitle
    );
    let _ = writeln!(
        prompt,
        "- Target maturity: Level {} ({})",
        context.target_level.level.value(),
        context.target_level.title
    );
    let _ = writeln!(prompt, "- Timeline: {} months", context.timeline.months());
    let _ = writeln!(prompt);

    if areas.is_empty() {
        let _ = writeln!(prompt, "The client has not prioritized any focus areas.");
    } else {
        let _ = writeln!(prompt, "Focus areas rated by the client (1-5):");
        for area in areas {
            let _ = writeln!(
                prompt,
                "- ID: \"{}\", Title: \"{}\", Rating: {}, Required Level: {}",
                area.id,
                area.title,
                area.priority,
                area.required_level.value()
            );
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Write a strategic leadership vision report. Guidelines:");
    let _ = writeln!(prompt, "1. Key trends explain why the industry is changing now (three trends).");
    let _ = writeln!(prompt, "2. Top challenges are the three main barriers between the current and target level.");
    let _ = writeln!(prompt, "3. Strategic actions (three or four) are shifts in approach, each with three or four key steps.");
    let _ = writeln!(prompt, "4. Link actions and roadmap phases to the focus area IDs above via relatedAreaIds; use only those IDs.");
    let _ = writeln!(
        prompt,
        "5. Split the {} months into phases that progress from foundation to scale to innovation.",
        context.timeline.months()
    );
    let _ = writeln!(prompt, "6. Identify bias and ethical risks of the recommended AI initiatives and concrete mitigations.");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Respond with JSON of exactly this shape:");
    prompt.push_str(REPORT_SHAPE);
    prompt.push('\n');

    prompt
}

/// Removes a surrounding Markdown code fence, if present.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::LevelDescription;
    use crate::domain::foundation::{AreaId, MaturityLevel, Rating, TimelineMonths};
    use crate::ports::RatedArea;

    fn level(l: MaturityLevel, title: &str, subtitle: &str) -> LevelDescription {
        LevelDescription {
            level: l,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            characteristics: vec![],
            symptoms: vec![],
        }
    }

    fn rated(id: &str, priority: u8) -> RatedArea {
        RatedArea {
            id: AreaId::new(id).unwrap(),
            title: format!("Title {}", id),
            priority: Rating::try_new(priority).unwrap(),
            required_level: MaturityLevel::Managed,
        }
    }

    fn context() -> ReportContext {
        ReportContext {
            industry: "Mining & Metals".to_string(),
            current_level: level(MaturityLevel::Defined, "Reactive", "Siloed data"),
            target_level: level(MaturityLevel::Measured, "Predictive", "Integrated"),
            timeline: TimelineMonths::try_new(18).unwrap(),
            rated_areas: vec![rated("b_area", 3), rated("a_area", 5), rated("c_area", 3)],
        }
    }

    #[test]
    fn prompt_describes_client_profile() {
        let prompt = build_report_prompt(&context());
        assert!(prompt.contains("Industry: Mining & Metals"));
        assert!(prompt.contains("Current maturity: Level 2 (Reactive) - Siloed data"));
        assert!(prompt.contains("Target maturity: Level 4 (Predictive)"));
        assert!(prompt.contains("Timeline: 18 months"));
        assert!(prompt.contains("\"responsibleAI\""));
    }

    #[test]
    fn prompt_lists_areas_by_priority_then_id() {
        let prompt = build_report_prompt(&context());
        let a = prompt.find("a_area").unwrap();
        let b = prompt.find("b_area").unwrap();
        let c = prompt.find("c_area").unwrap();
        assert!(a < b && b < c);
        assert!(prompt.contains("Rating: 5/5, Required Level: 3"));
    }

    #[test]
    fn prompt_handles_no_rated_areas() {
        let mut ctx = context();
        ctx.rated_areas.clear();
        assert!(build_report_prompt(&ctx).contains("has not prioritized any focus areas"));
    }

    #[test]
    fn strips_json_code_fence() {
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{}\n```  "), "{}");
    }

    #[test]
    fn leaves_plain_json_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1} \n"), "{\"a\": 1}");
    }
}
