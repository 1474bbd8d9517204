mod package_report_json;

pub use package_report_json::{parse_package_report, WirePackageReport};
