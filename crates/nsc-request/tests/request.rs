use chrono::NaiveDate;
use nsc_model::{
    AdvisoryKind, DateCell, IdentityColumn, IdentityRow, IdentityTable, InquiryType,
    RequestConfig, TrailerCountPolicy,
};
use nsc_request::{RequestFileWriter, RequestRecordBuilder};

fn config() -> RequestConfig {
    RequestConfig {
        fice: "001234".into(),
        branch: "00".into(),
        school_name: "Example State University".into(),
        inquiry_type: InquiryType::Pa,
        search: "20200101".into(),
        enrolled_students: false,
        trailer_count: TrailerCountPolicy::BodyRecords,
    }
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn three_students() -> IdentityTable {
    IdentityTable::new([
        IdentityColumn::Ssn,
        IdentityColumn::FirstName,
        IdentityColumn::MiddleInitial,
        IdentityColumn::LastName,
        IdentityColumn::Suffix,
        IdentityColumn::Dob,
        IdentityColumn::ReturnRequestField,
    ])
    .with_rows(vec![
        IdentityRow {
            ssn: text(" 123456789 "),
            first_name: text("FN1"),
            middle_initial: text("M"),
            last_name: text("LN1"),
            suffix: None,
            dob: DateCell::Date(NaiveDate::from_ymd_opt(1998, 1, 5).unwrap()),
            return_request_field: text("R1"),
            ..IdentityRow::default()
        },
        IdentityRow {
            first_name: text("   "),
            last_name: text("LN2"),
            dob: DateCell::Text("19990101".into()),
            return_request_field: text("R2"),
            ..IdentityRow::default()
        },
        IdentityRow {
            first_name: text("FN3 This is really long and should be truncated"),
            middle_initial: text("Quinn"),
            last_name: text("Ln3"),
            suffix: text("Junior"),
            dob: DateCell::Text("19991231".into()),
            return_request_field: text("R3"),
            ..IdentityRow::default()
        },
    ])
}

#[test]
fn end_to_end_request_render() {
    let config = config();
    let build = RequestRecordBuilder::new(&config, run_date())
        .build(&three_students())
        .unwrap();

    assert_eq!(build.dropped_rows, vec![2]);
    assert_eq!(build.file.records.len(), 2);
    assert_eq!(build.file.records[1].first_name, "FN3 This is really l");
    assert_eq!(build.file.records[1].source_row, 3);

    let kinds: Vec<AdvisoryKind> = build.advisories.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![AdvisoryKind::SearchBeginDateDefaulted, AdvisoryKind::RowsDropped]
    );

    let rendered = build.file.render().unwrap().replace('\t', " | ");
    insta::assert_snapshot!(rendered.trim_end(), @r"
    H1 | 001234 | 00 | Example State University | 20240301 | PA | I
    D1 | 123456789 | FN1 | M | LN1 |  | 19980105 | 20200101 |  | 001234 | 00 | R1
    D1 |  | FN3 This is really l | Q | Ln3 | Junio | 19991231 | 20200101 |  | 001234 | 00 | R3
    T1 | 2
    ");
}

#[test]
fn no_emitted_record_has_an_empty_first_name() {
    let config = config();
    let build = RequestRecordBuilder::new(&config, run_date())
        .build(&three_students())
        .unwrap();
    assert!(build.file.records.iter().all(|r| !r.first_name.is_empty()));
    assert_eq!(build.file.trailer_count, build.file.records.len());
}

#[test]
fn invalid_dob_aborts_the_build() {
    let mut table = three_students();
    table.push_row(IdentityRow {
        first_name: text("FN4"),
        dob: DateCell::Text("1/5/1998".into()),
        ..IdentityRow::default()
    });

    let config = config();
    let err = RequestRecordBuilder::new(&config, run_date())
        .build(&table)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "row 4: DOB '1/5/1998' is not a date or YYYYMMDD text"
    );
}

#[test]
fn missing_return_request_field_is_advised() {
    let table = IdentityTable::new(IdentityColumn::REQUIRED).with_rows(vec![IdentityRow {
        first_name: text("Ann"),
        ..IdentityRow::default()
    }]);

    let config = config();
    let build = RequestRecordBuilder::new(&config, run_date())
        .build(&table)
        .unwrap();
    assert_eq!(build.file.records[0].return_request_field, "");
    assert!(
        build
            .advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::ReturnRequestFieldMissing)
    );
}

#[test]
fn writer_reports_overwrite_and_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config();
    let build = RequestRecordBuilder::new(&config, run_date())
        .build(&three_students())
        .unwrap();
    let writer = RequestFileWriter::new(Some(dir.path().to_path_buf()), None);

    let first = writer.plan(&config);
    assert!(first.advisories.is_empty());
    first.write(&build.file).unwrap();

    let written = std::fs::read_to_string(dir.path().join("001234-00_PA_20200101.csv")).unwrap();
    assert_eq!(written, build.file.render().unwrap());
    assert_eq!(written.lines().count(), 4);

    let second = writer.plan(&config);
    assert_eq!(second.advisories.len(), 1);
    assert_eq!(second.advisories[0].kind, AdvisoryKind::OutputFileOverwritten);
}

#[test]
fn writer_fails_when_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("not-created");
    let config = config();
    let build = RequestRecordBuilder::new(&config, run_date())
        .build(&three_students())
        .unwrap();

    let plan = RequestFileWriter::new(Some(missing), Some("request.txt".into())).plan(&config);
    assert_eq!(plan.advisories[0].kind, AdvisoryKind::OutputPathMissing);
    assert!(plan.write(&build.file).is_err());
}
