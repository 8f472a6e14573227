use chrono::NaiveDate;
use nsc_model::{Advisory, NscConfig, RequestConfig};
use nsc_normalization::{
    expand_partial_search_date, format_compact, parse_compact_date, single_line,
};

use crate::error::{RequestError, Result};

/// Resolve a configuration file's contents into the settings the builder
/// consumes.
///
/// The school identity must be complete. The search date defaults to
/// `run_date` and is expanded from its partial forms; an expansion is
/// returned as an informational advisory.
pub fn resolve_request_config(
    config: &NscConfig,
    run_date: NaiveDate,
) -> Result<(RequestConfig, Option<Advisory>)> {
    config.validate()?;

    let (search, advisory) = match config.request.search.as_deref() {
        Some(search) if !search.trim().is_empty() => expand_partial_search_date(search),
        _ => (format_compact(run_date), None),
    };
    if parse_compact_date(&search).is_err() {
        return Err(RequestError::InvalidSearchDate { value: search });
    }
    if let Some(advisory) = &advisory {
        advisory.log();
    }

    let resolved = RequestConfig {
        fice: single_line(&config.school.fice).trim().to_string(),
        branch: single_line(&config.school.branch).trim().to_string(),
        school_name: single_line(&config.school.name).trim().to_string(),
        inquiry_type: config.request.inquiry_type,
        search: search.trim().to_string(),
        enrolled_students: config.request.enrolled_students,
        trailer_count: config.request.trailer_count,
    };
    Ok((resolved, advisory))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsc_model::{AdvisoryKind, ModelError, SchoolConfig};

    fn config(search: Option<&str>) -> NscConfig {
        let mut config = NscConfig {
            school: SchoolConfig {
                fice: "001234".into(),
                branch: "00".into(),
                name: "Example State University".into(),
            },
            ..NscConfig::default()
        };
        config.request.search = search.map(str::to_string);
        config
    }

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_search_defaults_to_run_date() {
        let (resolved, advisory) = resolve_request_config(&config(None), run_date()).unwrap();
        assert_eq!(resolved.search, "20240301");
        assert!(advisory.is_none());
    }

    #[test]
    fn test_partial_search_is_expanded() {
        let (resolved, advisory) =
            resolve_request_config(&config(Some("2019-08")), run_date()).unwrap();
        assert_eq!(resolved.search, "20190801");
        assert_eq!(advisory.unwrap().kind, AdvisoryKind::SearchDateExpanded);
    }

    #[test]
    fn test_unusable_search_is_rejected() {
        let err = resolve_request_config(&config(Some("last fall")), run_date()).unwrap_err();
        assert!(matches!(err, RequestError::InvalidSearchDate { .. }));
    }

    #[test]
    fn test_incomplete_school_is_rejected() {
        let mut incomplete = config(None);
        incomplete.school.branch.clear();
        let err = resolve_request_config(&incomplete, run_date()).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Config(ModelError::MissingConfig("school.branch"))
        ));
    }
}
