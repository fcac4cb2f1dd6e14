use std::fs;

use dietcomp_ingest::{load_lab_table, read_csv_table};

#[test]
fn loads_clean_lab_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cvas.csv");
    fs::write(
        &path,
        "desc_1,feedtype,NDF,aNDFom,RDP,CP,TFA,Ash\n\
         CORN SILAGE SHORT,FORAGE,37.2,35.3,16.5,24.4,2.61,3.66\n\
         CORN GRAIN,GRAIN,9.5,9.5,5.0,8.6,3.64,1.35\n",
    )
    .expect("write csv");

    let lab = load_lab_table(&path).expect("load");
    assert_eq!(lab.rows.len(), 2);
    assert_eq!(lab.rows[0].desc_1, "CORN SILAGE SHORT");
    assert_eq!(lab.rows[0].andfom, Some(35.3));
    assert_eq!(lab.rows[1].cp, Some(8.6));
    assert_eq!(lab.rows[1].lignin, None);
}

#[test]
fn skips_preamble_rows_before_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cvas_with_title.csv");
    fs::write(
        &path,
        "Cumberland Valley Analytical Services,,\n\
         desc_1,feedtype,NDF\n\
         SOYBEAN MEAL,PROTEIN,12.0\n",
    )
    .expect("write csv");

    let table = read_csv_table(&path).expect("read");
    assert_eq!(table.headers, vec!["desc_1", "feedtype", "NDF"]);
    assert_eq!(table.rows.len(), 1);

    let lab = load_lab_table(&path).expect("load");
    assert_eq!(lab.rows[0].desc_1, "SOYBEAN MEAL");
    assert_eq!(lab.rows[0].ndf, Some(12.0));
}

#[test]
fn blank_lines_are_ignored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("cvas_blanks.csv");
    fs::write(
        &path,
        "desc_1,feedtype,NDF\n,,\nCORN GRAIN,GRAIN,9.5\n,,\n",
    )
    .expect("write csv");

    let lab = load_lab_table(&path).expect("load");
    assert_eq!(lab.rows.len(), 1);
}
