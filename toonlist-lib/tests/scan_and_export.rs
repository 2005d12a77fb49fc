use chrono::NaiveDate;
use toonlist_lib::export::find_latest_export;
use toonlist_lib::{FsSource, ScanError, export_catalog, scan_webtoons};

fn touch(dir: &std::path::Path, name: &str, bytes: usize) {
    std::fs::write(dir.join(name), vec![0u8; bytes]).unwrap();
}

#[test]
fn scan_then_export_a_library() {
    let library = tempfile::tempdir().unwrap();
    touch(library.path(), "NA_Solo Leveling - Chugong [完].zip", 30);
    touch(library.path(), "WT_Tower of God - SIU.cbz", 20);
    touch(library.path(), "DA_Misaeng - Yoon Tae-ho.RAR", 10);
    touch(library.path(), "NoPlatformTitle.zip", 1);
    touch(library.path(), "notes.txt", 1);
    std::fs::create_dir(library.path().join("NA_Folder - Someone.zip")).unwrap();

    let catalog = scan_webtoons(&FsSource, library.path(), &mut |_| {}).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.skipped(), 1);

    let order: Vec<&str> = catalog.webtoons().iter().map(|w| w.title()).collect();
    assert_eq!(order, vec!["Misaeng", "Solo Leveling", "Tower of God"]);

    let exports = tempfile::tempdir().unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let summary = export_catalog(exports.path(), catalog.webtoons(), now).unwrap();
    assert_eq!(summary.total, 3);
    assert_eq!(
        find_latest_export(exports.path()).unwrap(),
        Some(summary.path.clone())
    );

    let mut reader = csv::Reader::from_path(&summary.path).unwrap();
    let platforms: Vec<String> = reader
        .records()
        .map(|r| r.unwrap()[0].to_string())
        .collect();
    assert_eq!(platforms, vec!["Daum Webtoon", "Naver Webtoon", "WT"]);
}

#[test]
fn missing_library_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let err = scan_webtoons(&FsSource, &root.path().join("missing"), &mut |_| {}).unwrap_err();
    assert!(matches!(err, ScanError::DirectoryUnreadable { .. }));
}
