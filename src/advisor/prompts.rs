use crate::models::{GradeEntry, Overview};

/// Render the advisor prompt for one analysis request.
///
/// One line per grade entry, input order preserved. Overview metrics the
/// dashboard did not send render as "N/A".
pub fn build_analysis_prompt(grades: &[GradeEntry], overview: &Overview) -> String {
    let grades_text = grades
        .iter()
        .map(|g| format!("- {}: {}/20 (Coef: {})", g.name, g.value, g.coef))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert academic advisor for a Computer Science student.\n\
         Here is the student's performance for Semester 1:\n\
         \n\
         Overview:\n\
         - Average: {average}/20\n\
         - Highest: {highest}/20\n\
         - Lowest: {lowest}/20\n\
         \n\
         Grades (Module: Grade/20, Coefficient):\n\
         {grades_text}\n\
         \n\
         Please provide a brief, motivating analysis:\n\
         1. Identify strengths and weaknesses.\n\
         2. If the average is below 10, give a triage plan to pass.\n\
         3. If the average is good, suggest how to excel further.\n\
         4. Keep it concise, friendly, and professional. Use emojis.\n\
         5. Format using Markdown.",
        average = format_metric(overview.average),
        highest = format_metric(overview.highest),
        lowest = format_metric(overview.lowest),
        grades_text = grades_text,
    )
}

fn format_metric(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(name: &str, value: f64, coef: f64) -> GradeEntry {
        GradeEntry {
            name: name.to_string(),
            value,
            coef,
        }
    }

    #[test]
    fn test_one_line_per_grade_in_input_order() {
        let grades = vec![
            grade("Algo", 15.0, 3.0),
            grade("Anglais", 12.5, 2.0),
            grade("SE", 9.0, 3.0),
        ];
        let prompt = build_analysis_prompt(&grades, &Overview::default());

        let lines: Vec<&str> = prompt
            .lines()
            .filter(|l| l.starts_with("- ") && l.contains("(Coef:"))
            .collect();

        assert_eq!(
            lines,
            vec![
                "- Algo: 15/20 (Coef: 3)",
                "- Anglais: 12.5/20 (Coef: 2)",
                "- SE: 9/20 (Coef: 3)",
            ]
        );
    }

    #[test]
    fn test_missing_overview_fields_render_as_placeholder() {
        let overview = Overview {
            average: Some(11.2),
            highest: None,
            lowest: None,
        };
        let prompt = build_analysis_prompt(&[], &overview);

        assert!(prompt.contains("- Average: 11.2/20"));
        assert!(prompt.contains("- Highest: N/A/20"));
        assert!(prompt.contains("- Lowest: N/A/20"));
    }

    #[test]
    fn test_empty_grades_render_as_empty_listing() {
        let prompt = build_analysis_prompt(&[], &Overview::default());

        assert!(prompt.contains("Grades (Module: Grade/20, Coefficient):\n\n"));
    }

    #[test]
    fn test_instructions_are_present_verbatim() {
        let prompt = build_analysis_prompt(&[], &Overview::default());

        assert!(prompt.starts_with("You are an expert academic advisor for a Computer Science student."));
        assert!(prompt.contains("Here is the student's performance for Semester 1:"));
        assert!(prompt.contains("Please provide a brief, motivating analysis:"));
        assert!(prompt.contains("1. Identify strengths and weaknesses."));
        assert!(prompt.contains("2. If the average is below 10, give a triage plan to pass."));
        assert!(prompt.contains("3. If the average is good, suggest how to excel further."));
        assert!(prompt.contains("4. Keep it concise, friendly, and professional. Use emojis."));
        assert!(prompt.contains("5. Format using Markdown."));
    }

    #[test]
    fn test_integer_values_render_without_decimal_point() {
        let grades = vec![grade("MEPS", 20.0, 3.0)];
        let prompt = build_analysis_prompt(&grades, &Overview::default());

        assert!(prompt.contains("- MEPS: 20/20 (Coef: 3)"));
        assert!(!prompt.contains("20.0/20"));
    }
}
