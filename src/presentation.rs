//! Portfolio page content
//!
//! Turns a [`PortfolioProfile`] into lines of text grouped by section. The
//! TUI styles them by [`LineKind`]; `folio show` and line mode print them
//! as-is.

use chrono::{Datelike, NaiveDate};

use crate::profile::{PortfolioItem, PortfolioProfile, ProfileType};

/// Label of the category filter entry that shows every project.
pub const ALL_CATEGORIES: &str = "All";

/// Sections of a portfolio page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Experience,
    Education,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Hero => "About",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Visual role of a page line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Page or section heading
    Heading,
    /// Entry title (a position, a project, a degree)
    Title,
    Body,
    /// Dates, technologies, secondary facts
    Detail,
    Blank,
}

/// One line of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub kind: LineKind,
    pub text: String,
}

impl PageLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }
}

/// Project category selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    selected: usize,
}

impl CategoryFilter {
    /// `All` followed by the profile's categories in first-seen order.
    pub fn for_profile(profile: &PortfolioProfile) -> Self {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        categories.extend(profile.categories());
        Self {
            categories,
            selected: 0,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected(&self) -> &str {
        self.categories
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or(ALL_CATEGORIES)
    }

    /// Select a category by name. Unknown names leave the filter unchanged.
    pub fn select(&mut self, category: &str) -> bool {
        match self.categories.iter().position(|c| c == category) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.categories.len().max(1);
    }

    pub fn prev(&mut self) {
        let len = self.categories.len().max(1);
        self.selected = (self.selected + len - 1) % len;
    }

    /// Items in the selected category.
    pub fn apply<'a>(&self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        let selected = self.selected();
        items
            .iter()
            .filter(|item| selected == ALL_CATEGORIES || item.category == selected)
            .collect()
    }
}

/// `2022-08` as `Aug 2022`. Unparseable input is returned unchanged.
pub fn format_month(date: &str) -> String {
    match parse_month(date) {
        Some(d) => d.format("%b %Y").to_string(),
        None => date.to_string(),
    }
}

/// `Aug 2022 – Present`, or `Aug 2020 – Jul 2022` for a closed period.
pub fn format_period(start: &str, end: Option<&str>) -> String {
    let end = end.map(format_month).unwrap_or_else(|| "Present".to_string());
    format!("{} \u{2013} {}", format_month(start), end)
}

/// Whole years and months between two `YYYY-MM` dates, e.g. `2 yr 3 mo`.
///
/// An open period runs to `today`.
pub fn format_duration(start: &str, end: Option<&str>, today: NaiveDate) -> String {
    let Some(start) = parse_month(start) else {
        return String::new();
    };
    let end = end.and_then(parse_month).unwrap_or(today);

    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let months = months.max(0);
    let (years, rest) = (months / 12, months % 12);

    match (years, rest) {
        (y, m) if y > 0 && m > 0 => format!("{} yr {} mo", y, m),
        (y, _) if y > 0 => format!("{} yr", y),
        (_, m) => format!("{} mo", m),
    }
}

fn parse_month(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", date.trim()), "%Y-%m-%d").ok()
}

/// Header text, e.g. `Sujit - Developer Portfolio`.
pub fn logo_text(profile: &PortfolioProfile, profile_type: ProfileType) -> String {
    let kind = match profile_type {
        ProfileType::Developer => "Developer Portfolio",
        ProfileType::Qa => "QA Portfolio",
    };
    match profile.name.split_whitespace().next() {
        Some(first) => format!("{} - {}", first, kind),
        None => kind.to_string(),
    }
}

pub fn logo_icon(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Developer => "💻",
        ProfileType::Qa => "🧪",
    }
}

/// Lines of one section.
pub fn section_lines(
    profile: &PortfolioProfile,
    section: Section,
    filter: &CategoryFilter,
    today: NaiveDate,
) -> Vec<PageLine> {
    let mut lines = Vec::new();

    match section {
        Section::Hero => {
            lines.push(PageLine::new(LineKind::Heading, &profile.name));
            lines.push(PageLine::new(LineKind::Title, &profile.title));
            lines.push(PageLine::blank());
            lines.push(PageLine::new(LineKind::Body, &profile.bio));
        }
        Section::Experience => {
            for exp in &profile.work_experience {
                lines.push(PageLine::new(
                    LineKind::Title,
                    format!("{} @ {}", exp.role, exp.company),
                ));
                lines.push(PageLine::new(
                    LineKind::Detail,
                    format!(
                        "{} ({})",
                        format_period(&exp.start_date, exp.end_date.as_deref()),
                        format_duration(&exp.start_date, exp.end_date.as_deref(), today)
                    ),
                ));
                for item in &exp.responsibilities {
                    lines.push(PageLine::new(LineKind::Body, format!("  • {}", item)));
                }
                if !exp.technologies.is_empty() {
                    lines.push(PageLine::new(
                        LineKind::Detail,
                        format!("  {}", exp.technologies.join(" · ")),
                    ));
                }
                lines.push(PageLine::blank());
            }
        }
        Section::Education => {
            for edu in &profile.education {
                let icon = edu.icon.as_deref().unwrap_or("🎓");
                lines.push(PageLine::new(
                    LineKind::Title,
                    format!("{} {}", icon, edu.degree),
                ));
                lines.push(PageLine::new(LineKind::Body, format!("  {}", edu.institution)));
                let detail = match &edu.percentage {
                    Some(pct) => format!("  {} · {}", edu.year, pct),
                    None => format!("  {}", edu.year),
                };
                lines.push(PageLine::new(LineKind::Detail, detail));
                lines.push(PageLine::blank());
            }
        }
        Section::Projects => {
            let tabs = filter
                .categories()
                .iter()
                .map(|c| {
                    if c == filter.selected() {
                        format!("[{}]", c)
                    } else {
                        c.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(PageLine::new(LineKind::Detail, tabs));
            lines.push(PageLine::blank());

            for item in filter.apply(&profile.portfolio_items) {
                lines.push(PageLine::new(LineKind::Title, &item.title));
                lines.push(PageLine::new(
                    LineKind::Detail,
                    format!(
                        "  {} · {} · {}",
                        item.category,
                        item.company,
                        format_period(&item.start_date, item.end_date.as_deref())
                    ),
                ));
                if let Some(description) = &item.description {
                    lines.push(PageLine::new(LineKind::Body, format!("  {}", description)));
                }
                for r in &item.responsibilities {
                    lines.push(PageLine::new(LineKind::Body, format!("  • {}", r)));
                }
                if !item.technologies.is_empty() {
                    lines.push(PageLine::new(
                        LineKind::Detail,
                        format!("  {}", item.technologies.join(" · ")),
                    ));
                }
                lines.push(PageLine::blank());
            }
        }
        Section::Contact => {
            lines.push(PageLine::new(
                LineKind::Body,
                format!("Email: {}", profile.contact.email),
            ));
            lines.push(PageLine::new(
                LineKind::Body,
                format!("Phone: {}", profile.contact.phone),
            ));
            if let Some(address) = &profile.contact.address {
                lines.push(PageLine::new(LineKind::Body, format!("Address: {}", address)));
            }
            lines.push(PageLine::blank());
            for link in &profile.social_links {
                lines.push(PageLine::new(
                    LineKind::Detail,
                    format!("{}: {}", link.name, link.url),
                ));
            }
        }
    }

    lines
}

/// Footer line, e.g. `© 2026 Sujit Kumar Patra. All rights reserved.`
pub fn footer_text(profile: &PortfolioProfile, today: NaiveDate) -> String {
    format!("© {} {}. All rights reserved.", today.year(), profile.name)
}

/// A whole page as plain text, every section with every project.
pub fn render_page(profile: &PortfolioProfile, profile_type: ProfileType, today: NaiveDate) -> String {
    let filter = CategoryFilter::for_profile(profile);
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", logo_icon(profile_type), logo_text(profile, profile_type)));

    for section in Section::ALL {
        out.push('\n');
        out.push_str(&format!("== {} ==\n", section.title()));
        for line in section_lines(profile, section, &filter, today) {
            out.push_str(&line.text);
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&footer_text(profile, today));
    out.push('\n');
    out
}
