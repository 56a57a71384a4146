//! Report rendering
//!
//! Assembles a populated person record into the fixed-order, multi-line
//! text report. Unset attributes are omitted entirely; only the ages of the
//! single relations fall back to "N/A", and only when the relation's name is
//! present at all.

use crate::error::FinderError;
use crate::extract::parse_timestamp;
use chrono::NaiveDate;
use dossier_domain::{age_on, Clock, PersonRecord, Qcode, Relative};

/// Width of the separator banner
const BANNER_WIDTH: usize = 80;

/// Renders person records into text reports
///
/// The renderer is pinned to one "today" so every age in one report is
/// computed against the same date.
pub struct ReportRenderer {
    today: NaiveDate,
}

impl ReportRenderer {
    /// Create a renderer whose "today" comes from the given clock
    pub fn new(clock: &dyn Clock) -> Self {
        Self::with_today(clock.today())
    }

    /// Create a renderer pinned to an explicit date
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Render the full report for one lookup
    ///
    /// # Errors
    /// Returns [`FinderError::MalformedField`] if a child or sibling carries
    /// a non-empty date that does not match the upstream timestamp format.
    /// Nothing is returned in that case; there is no partial report.
    pub fn render(&self, qcode: &Qcode, person: &PersonRecord) -> Result<String, FinderError> {
        let banner = "-".repeat(BANNER_WIDTH);
        let mut report = format!("{}\nDATA FOUND FOR Q-CODE {}:\n{}\n", banner, qcode, banner);

        if let Some(url) = &person.url {
            report.push_str(&format!("URL: {}\n", url));
        }
        if let Some(known_as) = &person.known_as {
            report.push_str(&format!("KNOWN AS: {}\n", known_as));
        }
        if let Some(birth_name) = &person.birth_name {
            report.push_str(&format!("BIRTH NAME: {}\n", birth_name));
        }
        if let Some(dob) = person.date_of_birth {
            report.push_str(&format!(
                "DATE OF BIRTH: {} ({} years old)\n",
                dob,
                age_on(dob, self.today)
            ));
        }

        self.push_relation(&mut report, "FATHER", &person.father_known_as, person.father_date_of_birth);
        self.push_relation(&mut report, "MOTHER", &person.mother_known_as, person.mother_date_of_birth);
        self.push_relation(&mut report, "SPOUSE", &person.spouse_known_as, person.spouse_date_of_birth);

        if let Some(occupation) = &person.occupation {
            report.push_str(&format!("OCCUPATION: {}\n", occupation));
        }
        if let Some(education) = &person.education {
            report.push_str(&format!("EDUCATION: {}\n", education));
        }
        if let Some(convictions) = &person.criminal_convictions {
            report.push_str(&format!("CRIMINAL CONVICTIONS: {}\n", convictions));
        }

        self.push_relatives(&mut report, "CHILDREN", "children", &person.children)?;
        self.push_relatives(&mut report, "SIBLINGS", "siblings", &person.siblings)?;

        Ok(report)
    }

    /// Emit one single-relation line: name plus age, or "age N/A"
    ///
    /// Nothing is emitted when the name is unset, even if a date is present.
    fn push_relation(
        &self,
        report: &mut String,
        label: &str,
        known_as: &Option<String>,
        dob: Option<NaiveDate>,
    ) {
        let Some(known_as) = known_as else {
            return;
        };
        match dob {
            Some(dob) => report.push_str(&format!(
                "{}: {} ({} years old)\n",
                label,
                known_as,
                age_on(dob, self.today)
            )),
            None => report.push_str(&format!("{}: {} (age N/A)\n", label, known_as)),
        }
    }

    /// Emit a multi-valued relation block: header plus one indented line each
    ///
    /// Sub-record dates are still raw strings here; this is where they are
    /// parsed, and where an unknown date becomes the "age N/A" marker.
    fn push_relatives(
        &self,
        report: &mut String,
        header: &str,
        field: &str,
        relatives: &Option<Vec<Relative>>,
    ) -> Result<(), FinderError> {
        let Some(relatives) = relatives else {
            return Ok(());
        };
        if relatives.is_empty() {
            return Ok(());
        }

        report.push_str(&format!("{}:\n", header));
        for relative in relatives {
            match &relative.date_of_birth {
                Some(raw) => {
                    let dob = parse_timestamp(field, raw)?;
                    report.push_str(&format!(
                        "    {} ({} years old)\n",
                        relative.known_as,
                        age_on(dob, self.today)
                    ));
                }
                None => {
                    report.push_str(&format!("    {} (age N/A)\n", relative.known_as));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_at(year: i32, month: u32, day: u32) -> ReportRenderer {
        ReportRenderer::with_today(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    fn qcode() -> Qcode {
        Qcode::parse("Q615").unwrap()
    }

    #[test]
    fn test_empty_record_renders_banner_only() {
        let renderer = renderer_at(2022, 6, 24);
        let report = renderer.render(&qcode(), &PersonRecord::new()).unwrap();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "-".repeat(80));
        assert_eq!(lines[1], "DATA FOUND FOR Q-CODE Q615:");
        assert_eq!(lines[2], "-".repeat(80));
    }

    #[test]
    fn test_date_of_birth_line_carries_age() {
        let person = PersonRecord {
            date_of_birth: NaiveDate::from_ymd_opt(1987, 6, 24),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 6, 24).render(&qcode(), &person).unwrap();

        assert!(report.contains("DATE OF BIRTH: 1987-06-24 (35 years old)\n"));
    }

    #[test]
    fn test_relation_without_date_gets_age_na() {
        let person = PersonRecord {
            father_known_as: Some("Jorge Messi".to_string()),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 6, 24).render(&qcode(), &person).unwrap();

        assert!(report.contains("FATHER: Jorge Messi (age N/A)\n"));
    }

    #[test]
    fn test_relation_date_without_name_is_omitted() {
        let person = PersonRecord {
            mother_date_of_birth: NaiveDate::from_ymd_opt(1948, 4, 18),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 6, 24).render(&qcode(), &person).unwrap();

        assert!(!report.contains("MOTHER"));
    }

    #[test]
    fn test_child_with_known_date_renders_age() {
        let person = PersonRecord {
            children: Some(vec![Relative {
                known_as: "A".to_string(),
                date_of_birth: Some("2012-11-02T00:00:00Z".to_string()),
            }]),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 11, 10).render(&qcode(), &person).unwrap();

        assert!(report.contains("CHILDREN:\n    A (10 years old)\n"));
    }

    #[test]
    fn test_child_with_unknown_date_renders_age_na() {
        let person = PersonRecord {
            children: Some(vec![Relative {
                known_as: "A".to_string(),
                date_of_birth: None,
            }]),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 11, 10).render(&qcode(), &person).unwrap();

        assert!(report.contains("CHILDREN:\n    A (age N/A)\n"));
    }

    #[test]
    fn test_empty_children_list_renders_no_header() {
        let person = PersonRecord {
            children: Some(vec![]),
            ..PersonRecord::new()
        };
        let report = renderer_at(2022, 6, 24).render(&qcode(), &person).unwrap();

        assert!(!report.contains("CHILDREN"));
    }

    #[test]
    fn test_malformed_child_date_aborts_render() {
        let person = PersonRecord {
            children: Some(vec![Relative {
                known_as: "A".to_string(),
                date_of_birth: Some("02/11/2012".to_string()),
            }]),
            ..PersonRecord::new()
        };
        let result = renderer_at(2022, 6, 24).render(&qcode(), &person);

        assert!(matches!(
            result,
            Err(FinderError::MalformedField { ref field, .. }) if field == "children"
        ));
    }

    #[test]
    fn test_fully_populated_record_line_order() {
        let person = PersonRecord {
            url: Some("http://www.wikidata.org/entity/Q615".to_string()),
            known_as: Some("Lionel Messi".to_string()),
            birth_name: Some("Lionel Andrés Messi".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1987, 6, 24),
            father_known_as: Some("Jorge Messi".to_string()),
            father_date_of_birth: NaiveDate::from_ymd_opt(1958, 1, 1),
            mother_known_as: Some("Celia Cuccittini".to_string()),
            mother_date_of_birth: None,
            spouse_known_as: Some("Antonela Roccuzzo".to_string()),
            spouse_date_of_birth: NaiveDate::from_ymd_opt(1988, 2, 26),
            children: Some(vec![Relative {
                known_as: "Thiago Messi".to_string(),
                date_of_birth: Some("2012-11-02T00:00:00Z".to_string()),
            }]),
            siblings: Some(vec![Relative {
                known_as: "Rodrigo Messi".to_string(),
                date_of_birth: None,
            }]),
            occupation: Some("association football player".to_string()),
            education: Some("La Masia".to_string()),
            criminal_convictions: Some("tax fraud".to_string()),
        };
        let report = renderer_at(2022, 6, 24).render(&qcode(), &person).unwrap();

        let prefixes: Vec<&str> = report
            .lines()
            .skip(3)
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(
            prefixes,
            vec![
                "URL",
                "KNOWN AS",
                "BIRTH NAME",
                "DATE OF BIRTH",
                "FATHER",
                "MOTHER",
                "SPOUSE",
                "OCCUPATION",
                "EDUCATION",
                "CRIMINAL CONVICTIONS",
                "CHILDREN",
                "    Thiago Messi (9 years old)",
                "SIBLINGS",
                "    Rodrigo Messi (age N/A)",
            ]
        );
    }
}
