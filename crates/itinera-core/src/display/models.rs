//! Display implementations for domain models.
//!
//! Output is markdown so the CLI renderer can style it; the same text reads
//! fine as plain output.

use std::fmt;

use super::datetime::{ShortDate, SlashDate};
use crate::models::{DayBucket, ItemKind, ItineraryItem, Trip};

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Trip {
    /// Metadata lines shared by the trip card and the itinerary header.
    pub(crate) fn fmt_metadata(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.duration_days();
        writeln!(
            f,
            "- **Dates**: {} to {} ({days} {})",
            SlashDate(self.start_date),
            SlashDate(self.end_date),
            if days == 1 { "day" } else { "days" }
        )?;
        if let Some(country) = &self.country {
            writeln!(f, "- **Country**: {country}")?;
        }
        if let Some(cover) = &self.cover_image {
            if cover.starts_with("http://") || cover.starts_with("https://") {
                writeln!(f, "- **Cover**: {cover}")?;
            } else {
                writeln!(f, "- **Cover**: inline image")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        self.fmt_metadata(f)?;
        writeln!(f)
    }
}

impl ItineraryItem {
    /// Formats the item card, numbered when shown inside a day.
    pub(crate) fn fmt_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        number: Option<usize>,
    ) -> fmt::Result {
        match number {
            Some(n) => writeln!(f, "### {n}. {} ({})", self.title, self.kind.with_icon())?,
            None => writeln!(f, "### {} ({})", self.title, self.kind.with_icon())?,
        }
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Date**: {}", SlashDate(self.date))?;
        if !self.location.is_empty() {
            writeln!(f, "- **Location**: {}", self.location)?;
        }

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ItineraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_card(f, None)
    }
}

impl fmt::Display for DayBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", ShortDate(self.date), self.week_day)?;
        writeln!(f)?;
        fmt_details(f, self)
    }
}

/// Numbered item cards of one day, or a placeholder line.
pub(crate) fn fmt_details(f: &mut fmt::Formatter<'_>, bucket: &DayBucket) -> fmt::Result {
    if bucket.is_empty() {
        writeln!(f, "No plans for this day.")?;
        return writeln!(f);
    }
    for (index, item) in bucket.details.iter().enumerate() {
        item.fmt_card(f, Some(index + 1))?;
    }
    Ok(())
}
