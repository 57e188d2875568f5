use handlebars::Handlebars;

/// Builds the email template registry once at startup. Templates are
/// compiled in; nothing mutates the registry afterwards.
pub fn template_registry() -> anyhow::Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry.register_template_string(
        "ticket_feedback_request",
        include_str!("../templates/ticket_feedback_request.hbs"),
    )?;
    registry.register_template_string(
        "report_created",
        include_str!("../templates/report_created.hbs"),
    )?;
    registry.register_template_string("generic", include_str!("../templates/generic.hbs"))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feedback_request_renders_ticket_fields() {
        let registry = template_registry().unwrap();
        let body = registry
            .render(
                "ticket_feedback_request",
                &json!({ "ticketId": "17", "subject": "Pump P-104 leaking" }),
            )
            .unwrap();
        assert!(body.contains("Pump P-104 leaking"));
        assert!(body.contains("17"));
    }

    #[test]
    fn all_bundled_templates_are_registered() {
        let registry = template_registry().unwrap();
        for name in ["ticket_feedback_request", "report_created", "generic"] {
            assert!(registry.has_template(name), "missing template {name}");
        }
    }
}
