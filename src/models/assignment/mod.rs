// Assignment module
// Service assignment stored at an occupied schedule slot

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes covered by one grid row.
pub const QUARTER_MINUTES: u32 = 15;

/// Color tag attached to an assignment.
///
/// The tag is an opaque identifier; turning it into an on-screen color is the
/// UI palette's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorTag {
    #[default]
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
}

impl ColorTag {
    /// All tags in swatch order
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Yellow,
        ColorTag::Purple,
    ];

    /// Stable identifier of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Green => "bg-green-500",
            ColorTag::Blue => "bg-blue-500",
            ColorTag::Red => "bg-red-500",
            ColorTag::Yellow => "bg-yellow-500",
            ColorTag::Purple => "bg-purple-500",
        }
    }

    /// Human-readable name, used for swatch tooltips
    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::Green => "Green",
            ColorTag::Blue => "Blue",
            ColorTag::Red => "Red",
            ColorTag::Yellow => "Yellow",
            ColorTag::Purple => "Purple",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of a service. Only whole quarter-hours up to one hour are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceDuration {
    #[default]
    Fifteen,
    Thirty,
    FortyFive,
    Sixty,
}

impl ServiceDuration {
    pub const ALL: [ServiceDuration; 4] = [
        ServiceDuration::Fifteen,
        ServiceDuration::Thirty,
        ServiceDuration::FortyFive,
        ServiceDuration::Sixty,
    ];

    pub fn minutes(&self) -> u32 {
        match self {
            ServiceDuration::Fifteen => 15,
            ServiceDuration::Thirty => 30,
            ServiceDuration::FortyFive => 45,
            ServiceDuration::Sixty => 60,
        }
    }

    /// Number of grid rows the service covers
    pub fn quarter_span(&self) -> u32 {
        self.minutes() / QUARTER_MINUTES
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceDuration::Fifteen => "15 minutes",
            ServiceDuration::Thirty => "30 minutes",
            ServiceDuration::FortyFive => "45 minutes",
            ServiceDuration::Sixty => "1 hour",
        }
    }
}

/// Service booked into a single slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub service: String,
    pub color: ColorTag,
    pub duration: ServiceDuration,
}

impl Assignment {
    pub fn new(service: impl Into<String>, color: ColorTag, duration: ServiceDuration) -> Self {
        Self {
            service: service.into(),
            color,
            duration,
        }
    }

    /// Build an assignment from form input.
    ///
    /// The service name must contain something other than whitespace. The text
    /// is stored exactly as entered, surrounding whitespace included.
    pub fn validated(
        service: &str,
        color: ColorTag,
        duration: ServiceDuration,
    ) -> Result<Self, AssignmentError> {
        if service.trim().is_empty() {
            return Err(AssignmentError::EmptyServiceName);
        }

        Ok(Self::new(service, color, duration))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("Please enter a service name!")]
    EmptyServiceName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tags_keep_swatch_order() {
        let ids: Vec<&str> = ColorTag::ALL.iter().map(ColorTag::as_str).collect();
        assert_eq!(
            ids,
            vec![
                "bg-green-500",
                "bg-blue-500",
                "bg-red-500",
                "bg-yellow-500",
                "bg-purple-500"
            ]
        );
        assert_eq!(ColorTag::default(), ColorTag::Green);
    }

    #[test]
    fn test_color_tag_displays_identifier() {
        assert_eq!(ColorTag::Red.to_string(), "bg-red-500");
        assert_eq!(ColorTag::Purple.name(), "Purple");
    }

    #[test]
    fn test_duration_spans_quarters() {
        assert_eq!(ServiceDuration::Fifteen.quarter_span(), 1);
        assert_eq!(ServiceDuration::Thirty.quarter_span(), 2);
        assert_eq!(ServiceDuration::FortyFive.quarter_span(), 3);
        assert_eq!(ServiceDuration::Sixty.quarter_span(), 4);
    }

    #[test]
    fn test_duration_defaults_to_fifteen_minutes() {
        assert_eq!(ServiceDuration::default().minutes(), 15);
        assert_eq!(ServiceDuration::Sixty.label(), "1 hour");
    }

    #[test]
    fn test_validated_rejects_blank_service() {
        let result = Assignment::validated("   ", ColorTag::Blue, ServiceDuration::Thirty);
        assert_eq!(result, Err(AssignmentError::EmptyServiceName));

        let result = Assignment::validated("", ColorTag::Blue, ServiceDuration::Thirty);
        assert_eq!(result, Err(AssignmentError::EmptyServiceName));
    }

    #[test]
    fn test_validated_keeps_untrimmed_text() {
        let assignment =
            Assignment::validated("  Haircut ", ColorTag::Green, ServiceDuration::Fifteen).unwrap();
        assert_eq!(assignment.service, "  Haircut ");
    }

    #[test]
    fn test_error_message_matches_form_hint() {
        assert_eq!(
            AssignmentError::EmptyServiceName.to_string(),
            "Please enter a service name!"
        );
    }
}
