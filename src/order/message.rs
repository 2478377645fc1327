//! Deterministic plain-text rendering of a submission.
//!
//! The notification email body has four labeled sections in fixed order.
//! Field values are inserted verbatim (empty when not supplied) so the
//! workshop always sees the same layout.

use super::types::Submission;

/// Render the outbound message text for a submission
pub fn render(submission: &Submission) -> String {
    let name = format!(
        "{} {}",
        submission.first_name.trim(),
        submission.last_name.trim()
    )
    .trim()
    .to_string();

    let lines = [
        "CONTACT".to_string(),
        format!("Name: {name}"),
        format!("Phone: {}", submission.phone),
        String::new(),
        "ADDRESS".to_string(),
        format!("Street: {}", submission.street),
        format!("City: {}", submission.city),
        format!("ZIP: {}", submission.zip),
        String::new(),
        "TREE / MATERIAL".to_string(),
        format!("Species requested: {}", submission.species),
        format!("Trunk circumference: {}", submission.circumference),
        format!(
            "Tree dry (sitting for years): {}",
            yes_no(submission.tree_dry)
        ),
        format!("Tree green (freshly cut): {}", yes_no(submission.tree_green)),
        String::new(),
        "DESCRIPTION".to_string(),
        submission.description.clone(),
    ];

    lines.join("\n")
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Submission {
        Submission {
            turnstile_token: "t1".to_string(),
            first_name: "  Ada ".to_string(),
            last_name: " Lovelace ".to_string(),
            phone: "+43 660 1234567".to_string(),
            street: "Mühlgasse 4".to_string(),
            city: "Graz".to_string(),
            zip: "8010".to_string(),
            species: "Oak".to_string(),
            circumference: "120cm".to_string(),
            tree_dry: true,
            tree_green: false,
            description: "Bear, about 1m tall".to_string(),
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let text = render(&sample());
        let contact = text.find("CONTACT").expect("CONTACT section");
        let address = text.find("ADDRESS").expect("ADDRESS section");
        let material = text.find("TREE / MATERIAL").expect("TREE / MATERIAL section");
        let description = text.find("DESCRIPTION").expect("DESCRIPTION section");
        assert!(contact < address);
        assert!(address < material);
        assert!(material < description);
    }

    #[test]
    fn name_parts_are_trimmed_and_joined() {
        let text = render(&sample());
        assert!(text.contains("Name: Ada Lovelace\n"));
    }

    #[test]
    fn single_name_part_has_no_trailing_space() {
        let mut submission = sample();
        submission.last_name = String::new();
        let text = render(&submission);
        assert!(text.contains("Name: Ada\n"));
    }

    #[test]
    fn booleans_render_as_yes_or_no() {
        let text = render(&sample());
        assert!(text.contains("Tree dry (sitting for years): Yes"));
        assert!(text.contains("Tree green (freshly cut): No"));
    }

    #[test]
    fn missing_fields_render_as_empty_values() {
        let text = render(&Submission::default());
        assert!(text.contains("Name: \n"));
        assert!(text.contains("Phone: \n"));
        assert!(text.contains("Street: \n"));
        assert!(text.contains("Species requested: \n"));
        assert!(text.contains("Tree dry (sitting for years): No"));
        assert!(text.ends_with("DESCRIPTION\n"));
    }

    #[test]
    fn every_field_is_on_its_own_line() {
        let text = render(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "CONTACT");
        assert_eq!(lines[4], "ADDRESS");
        assert_eq!(lines[9], "TREE / MATERIAL");
        assert_eq!(lines[15], "DESCRIPTION");
        assert_eq!(lines[16], "Bear, about 1m tall");
    }
}
