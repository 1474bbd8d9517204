use crate::application::read_models::{
    BannerView, BreakdownRowView, DependencyRowView, GradeCountView, MinGradeView, PackageScoreView,
    ScoreReadModel,
};
use crate::ports::outbound::ScoreFormatter;
use crate::shared::Result;

const DEPENDENCY_TABLE_HEADER: &str = "| Package | Version | Score | Grade | All Deps | Banner |\n";
const DEPENDENCY_TABLE_SEPARATOR: &str = "|---------|---------|------:|:-----:|---------:|--------|\n";

const BREAKDOWN_TABLE_HEADER: &str = "| Term | Points |\n";
const BREAKDOWN_TABLE_SEPARATOR: &str = "|------|-------:|\n";

/// MarkdownFormatter adapter for human-readable score reports
///
/// Renders the package score card, the optional score explanation, a table
/// of direct dependencies and the grade distribution.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Markdown link to the package page on npmjs.com
    fn package_to_npm_link(name: &str) -> String {
        format!(
            "[{}](https://www.npmjs.com/package/{})",
            Self::escape_markdown_table_cell(name),
            name
        )
    }

    fn banner_label(banner: Option<&BannerView>) -> String {
        banner
            .map(|b| format!("{} {}", b.icon, b.class))
            .unwrap_or_default()
    }

    fn signed(delta: i64) -> String {
        if delta > 0 {
            format!("+{}", delta)
        } else {
            delta.to_string()
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ScoreReadModel) {
        output.push_str("# Package Score Report\n\n");
        output.push_str(&format!(
            "Generated by {} {} at {} ({})\n\n",
            model.metadata.tool_name,
            model.metadata.tool_version,
            model.metadata.timestamp,
            model.metadata.report_id
        ));
    }

    fn render_package(&self, output: &mut String, package: &PackageScoreView) {
        output.push_str(&format!(
            "## {}@{}\n\n",
            Self::package_to_npm_link(&package.name),
            package.version
        ));

        output.push_str(&format!(
            "- **Score:** {} (grade **{}**, `{}`)\n",
            package.total_score, package.grade, package.grade_class
        ));
        if package.banner.is_some() {
            output.push_str(&format!(
                "- **Banner:** {}\n",
                Self::banner_label(package.banner.as_ref())
            ));
        }
        output.push_str(&format!(
            "- **Freshness score:** {}\n",
            package.freshness_score
        ));
        output.push_str(&format!(
            "- **Dependencies:** {} immediate, {} total\n",
            package.immediate_dependency_count, package.all_dependency_count
        ));
        if let Some(authors) = package.authors {
            output.push_str(&format!("- **Authors:** {}\n", authors));
        }
        if let Some(contributors) = package.contributors {
            output.push_str(&format!("- **Contributors:** {}\n", contributors));
        }
        if let Some(release_date) = &package.release_date {
            output.push_str(&format!("- **Released:** {}\n", release_date));
        }
        if let Some(scoring_date) = &package.scoring_date {
            output.push_str(&format!("- **Scored:** {}\n", scoring_date));
        }
        output.push('\n');

        self.render_vulnerabilities(output, package);

        if let Some(breakdown) = &package.breakdown {
            self.render_breakdown(output, breakdown);
        }
    }

    fn render_vulnerabilities(&self, output: &mut String, package: &PackageScoreView) {
        let direct = &package.direct_vulnerabilities;
        let indirect = &package.indirect_vulnerabilities;

        output.push_str("### Vulnerabilities\n\n");
        output.push_str("| Severity | Direct | Indirect |\n");
        output.push_str("|----------|-------:|---------:|\n");
        for (severity, d, i) in [
            ("Critical", direct.critical, indirect.critical),
            ("High", direct.high, indirect.high),
            ("Medium", direct.medium, indirect.medium),
            ("Low", direct.low, indirect.low),
        ] {
            output.push_str(&format!("| {} | {} | {} |\n", severity, d, i));
        }
        output.push('\n');
    }

    fn render_breakdown(&self, output: &mut String, breakdown: &[BreakdownRowView]) {
        output.push_str("### Score Explanation\n\n");
        output.push_str(BREAKDOWN_TABLE_HEADER);
        output.push_str(BREAKDOWN_TABLE_SEPARATOR);

        // The closing entry is the total and is rendered in bold
        let (total, terms) = match breakdown.split_last() {
            Some((total, terms)) => (Some(total), terms),
            None => (None, breakdown),
        };
        for row in terms {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&row.label),
                Self::signed(row.delta)
            ));
        }
        if let Some(total) = total {
            output.push_str(&format!(
                "| **{}** | **{}** |\n",
                Self::escape_markdown_table_cell(&total.label),
                total.delta
            ));
        }
        output.push('\n');
    }

    fn render_dependencies(&self, output: &mut String, dependencies: &[DependencyRowView]) {
        output.push_str("## Direct Dependencies\n\n");

        if dependencies.is_empty() {
            output.push_str("No direct dependency reports.\n\n");
            return;
        }

        output.push_str(DEPENDENCY_TABLE_HEADER);
        output.push_str(DEPENDENCY_TABLE_SEPARATOR);
        for dep in dependencies {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::package_to_npm_link(&dep.name),
                Self::escape_markdown_table_cell(&dep.version),
                dep.total_score,
                dep.grade,
                dep.all_dependency_count,
                Self::banner_label(dep.banner.as_ref())
            ));
        }
        output.push('\n');
    }

    fn render_grade_distribution(&self, output: &mut String, buckets: &[GradeCountView]) {
        output.push_str("## Grade Distribution\n\n");
        output.push_str("| Grade | Packages |\n");
        output.push_str("|:-----:|---------:|\n");
        for bucket in buckets {
            output.push_str(&format!("| {} | {} |\n", bucket.grade, bucket.count));
        }
        output.push('\n');
    }

    fn render_min_grade(&self, output: &mut String, package: &PackageScoreView, gate: &MinGradeView) {
        output.push_str("## Minimum Grade\n\n");
        if gate.passed {
            output.push_str(&format!(
                "✅ Grade {} meets the minimum grade {}.\n",
                package.grade, gate.min_grade
            ));
        } else {
            output.push_str(&format!(
                "❌ Grade {} is worse than the minimum grade {}.\n",
                package.grade, gate.min_grade
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreFormatter for MarkdownFormatter {
    fn format(&self, model: &ScoreReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_package(&mut output, &model.package);
        self.render_dependencies(&mut output, &model.dependencies);
        self.render_grade_distribution(&mut output, &model.grade_distribution);

        if let Some(gate) = &model.min_grade {
            self.render_min_grade(&mut output, &model.package, gate);
        }

        Ok(output)
    }
}
