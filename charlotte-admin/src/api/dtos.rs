use std::fmt;

use domain_content::command::{
    NewBanner, NewDepartment, NewFavorite, UpdateBanner, UpdateDepartment,
};
use domain_notify::command::NotifyCommand;
use domain_support::command::{FeedbackSubmission, NewReport, NewTicket};
use domain_support::model::entity::ReportSeverity;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Accumulated field-level validation failures for one payload.
#[derive(Debug, Default)]
pub struct ValidationErrors(pub Vec<FieldError>);

#[derive(Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

fn check_rating(errors: &mut ValidationErrors, field: &'static str, value: i32) {
    if !(0..=3).contains(&value) {
        errors.push(field, "must be between 0 and 3");
    }
}

fn check_not_blank(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub ticket_id: String,
    pub knowledge: i32,
    pub timing: i32,
    pub escalation: i32,
    pub resolved: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl SubmitFeedbackRequest {
    pub fn validate(self, acting_user: Option<String>) -> Result<FeedbackSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "ticketId", &self.ticket_id);
        if self.ticket_id.len() > 64 {
            errors.push("ticketId", "must be at most 64 characters");
        }
        check_rating(&mut errors, "knowledge", self.knowledge);
        check_rating(&mut errors, "timing", self.timing);
        check_rating(&mut errors, "escalation", self.escalation);
        if !(self.resolved == 0 || self.resolved == 1) {
            errors.push("resolved", "must be 0 or 1");
        }
        errors.into_result(FeedbackSubmission {
            ticket_id: self.ticket_id,
            knowledge: self.knowledge,
            timing: self.timing,
            escalation: self.escalation,
            resolved: self.resolved,
            comment: self.comment,
            acting_user,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
}

impl CreateTicketRequest {
    pub fn validate(self, requester: Option<String>) -> Result<NewTicket, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "subject", &self.subject);
        errors.into_result(NewTicket {
            subject: self.subject,
            description: self.description,
            requester,
            assignee: self.assignee,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub department_id: Option<i64>,
    pub severity: String,
}

impl CreateReportRequest {
    pub fn validate(self, reporter: Option<String>) -> Result<NewReport, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "title", &self.title);
        check_not_blank(&mut errors, "description", &self.description);
        let severity = match ReportSeverity::parse(&self.severity) {
            Some(s) => s,
            None => {
                errors.push("severity", "must be one of MINOR, MAJOR, CRITICAL");
                ReportSeverity::Minor
            }
        };
        errors.into_result(NewReport {
            title: self.title,
            description: self.description,
            department_id: self.department_id,
            severity,
            reporter,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub manager_email: Option<String>,
}

impl DepartmentRequest {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "name", &self.name);
        check_not_blank(&mut errors, "code", &self.code);
        if let Some(email) = &self.manager_email {
            if !email.contains('@') {
                errors.push("managerEmail", "must be an email address");
            }
        }
        errors
    }

    pub fn validate_new(self) -> Result<NewDepartment, ValidationErrors> {
        self.check().into_result(NewDepartment {
            name: self.name,
            code: self.code,
            parent_id: self.parent_id,
            manager_email: self.manager_email,
        })
    }

    pub fn validate_update(self) -> Result<UpdateDepartment, ValidationErrors> {
        self.check().into_result(UpdateDepartment {
            name: self.name,
            code: self.code,
            parent_id: self.parent_id,
            manager_email: self.manager_email,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerRequest {
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl BannerRequest {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "title", &self.title);
        check_not_blank(&mut errors, "imageUrl", &self.image_url);
        if let (Some(starts), Some(ends)) = (self.starts_at, self.ends_at) {
            if ends <= starts {
                errors.push("endsAt", "must be after startsAt");
            }
        }
        errors
    }

    pub fn validate_new(self) -> Result<NewBanner, ValidationErrors> {
        self.check().into_result(NewBanner {
            title: self.title,
            image_url: self.image_url,
            link_url: self.link_url,
            position: self.position,
            active: self.active,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        })
    }

    pub fn validate_update(self) -> Result<UpdateBanner, ValidationErrors> {
        self.check().into_result(UpdateBanner {
            title: self.title,
            image_url: self.image_url,
            link_url: self.link_url,
            position: self.position,
            active: self.active,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub position: i32,
}

impl CreateFavoriteRequest {
    pub fn validate(self, user_id: String) -> Result<NewFavorite, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_not_blank(&mut errors, "label", &self.label);
        check_not_blank(&mut errors, "url", &self.url);
        errors.into_result(NewFavorite {
            user_id,
            label: self.label,
            url: self.url,
            position: self.position,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRequest {
    pub recipient: String,
    pub subject: String,
    pub template: String,
    #[serde(default = "default_context")]
    pub context: Value,
}

fn default_context() -> Value {
    Value::Object(Default::default())
}

impl NotifyRequest {
    pub fn validate(self) -> Result<NotifyCommand, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if !self.recipient.contains('@') {
            errors.push("recipient", "must be an email address");
        }
        check_not_blank(&mut errors, "subject", &self.subject);
        check_not_blank(&mut errors, "template", &self.template);
        errors.into_result(NotifyCommand {
            recipient: self.recipient,
            subject: self.subject,
            template: self.template,
            context: self.context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_request(knowledge: i32, resolved: i32) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            ticket_id: "345".into(),
            knowledge,
            timing: 2,
            escalation: 1,
            resolved,
            comment: None,
        }
    }

    #[test]
    fn ratings_outside_zero_to_three_are_rejected() {
        for bad in [-1, 4, 99] {
            let result = feedback_request(bad, 1).validate(None);
            let errors = result.err().map(|e| e.to_string());
            assert_eq!(errors.as_deref(), Some("knowledge: must be between 0 and 3"));
        }
    }

    #[test]
    fn resolved_must_be_binary() {
        assert!(feedback_request(3, 2).validate(None).is_err());
        assert!(feedback_request(3, 0).validate(None).is_ok());
        assert!(feedback_request(3, 1).validate(None).is_ok());
    }

    #[test]
    fn boundary_ratings_pass() {
        let submission = feedback_request(0, 1).validate(Some("u-9".into())).unwrap();
        assert_eq!(submission.knowledge, 0);
        assert_eq!(submission.acting_user.as_deref(), Some("u-9"));
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let request = SubmitFeedbackRequest {
            ticket_id: " ".into(),
            knowledge: 7,
            timing: -2,
            escalation: 3,
            resolved: 5,
            comment: None,
        };
        let errors = request.validate(None).unwrap_err();
        let fields: Vec<_> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["ticketId", "knowledge", "timing", "resolved"]);
    }

    #[test]
    fn overlong_ticket_id_is_rejected() {
        let mut request = feedback_request(1, 1);
        request.ticket_id = "9".repeat(65);
        assert!(request.validate(None).is_err());
    }

    #[test]
    fn banner_window_must_be_ordered() {
        let request = BannerRequest {
            title: "Safety week".into(),
            image_url: "https://cdn.example.com/safety.png".into(),
            link_url: None,
            position: 0,
            active: true,
            starts_at: Some(Utc::now()),
            ends_at: Some(Utc::now() - chrono::Duration::hours(1)),
        };
        assert!(request.validate_new().is_err());
    }

    #[test]
    fn unknown_report_severity_is_rejected() {
        let request = CreateReportRequest {
            title: "Leaking drum".into(),
            description: "Drum 17 leaks at the seam".into(),
            department_id: None,
            severity: "SEVERE".into(),
        };
        assert!(request.validate(None).is_err());
    }
}
