//! Project catalogue and the filter tabs over it.

/// Category a project is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Portfolio,
    WebApp,
    Dashboard,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Portfolio => "Portfolio",
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::Dashboard => "Dashboard",
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Technology tags. Empty entries are kept as authored and skipped when shown.
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
    pub category: ProjectCategory,
}

impl Project {
    /// Tags with blank entries removed.
    pub fn visible_tags(&self) -> impl Iterator<Item = &'static str> {
        self.tags.iter().copied().filter(|t| !t.trim().is_empty())
    }
}

/// Filter tab above the project grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    WebApp,
    Dashboard,
}

impl ProjectFilter {
    /// Tabs in display order.
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Featured,
        ProjectFilter::WebApp,
        ProjectFilter::Dashboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Featured => "Featured",
            ProjectFilter::WebApp => "Web App",
            ProjectFilter::Dashboard => "Dashboard",
        }
    }

    /// Cycle to the next tab.
    pub fn next(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Featured,
            ProjectFilter::Featured => ProjectFilter::WebApp,
            ProjectFilter::WebApp => ProjectFilter::Dashboard,
            ProjectFilter::Dashboard => ProjectFilter::All,
        }
    }

    /// Whether a project is shown under this tab.
    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
            ProjectFilter::WebApp => project.category == ProjectCategory::WebApp,
            ProjectFilter::Dashboard => project.category == ProjectCategory::Dashboard,
        }
    }
}

/// Projects visible under `filter`, in catalogue order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// The project catalogue.
pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "ZeeFrames – UI/UX Replica Project",
        description: "A pixel-perfect frontend replica of the ZeeFrames design studio website, \
            recreated to practice layout precision, responsiveness, and modern UI structure.",
        tags: &["React.js", "", "javascript", "Tailwind CSS", "Framer Motion"],
        live_url: "https://zeeframes-v03.vercel.app",
        github_url: "https://github.com/chusamaikram/Zeeframes",
        featured: true,
        category: ProjectCategory::Portfolio,
    },
    Project {
        id: 2,
        title: "Dot It – Productivity & Task Manager",
        description: "A task management web app using static JSON data to dynamically display \
            tasks, with search and filter functionality for easy organization.",
        tags: &["React.js", "Tailwind Css"],
        live_url: "https://dot-it-pi.vercel.app/",
        github_url: "https://github.com/chusamaikram/React-Projects/tree/master/dot-it",
        featured: false,
        category: ProjectCategory::WebApp,
    },
    Project {
        id: 3,
        title: "Dentalook – Dental Clinic Website Design",
        description: "A responsive dental clinic web app replica featuring interactive line and \
            pie charts to visualize patient and appointment data.",
        tags: &["React.js", "Echarts", "Tailwind CSS"],
        live_url: "https://dentalook-v2.vercel.app/",
        github_url: "https://github.com/chusamaikram/React-Projects/tree/master/dentalook",
        featured: true,
        category: ProjectCategory::Dashboard,
    },
    Project {
        id: 4,
        title: "Govt High School Minchinabad – Educational Website",
        description: "A professionally designed responsive website showcasing a government high \
            school's academic programs, faculty, admissions, events, and student success stories \
            to engage the community.",
        tags: &["Html5", "Css3", "Javascript", "Tailwind CSS"],
        live_url: "https://gmhs-minchinabad.vercel.app/",
        github_url: "https://github.com/chusamaikram/gmhs-portfolio",
        featured: false,
        category: ProjectCategory::Portfolio,
    },
    Project {
        id: 5,
        title: "ZAPTA Contact Page – UI Replica",
        description: "A pixel-perfect replica of the original ZAPTA Technologies contact page \
            built to practice layout accuracy, responsive design, and modern UI structure.",
        tags: &["Html5", "Javascript", "Codepen", "Tailwind Css", "Jquery"],
        live_url: "https://gmhs-minchinabad.vercel.app/",
        github_url: "https://github.com/chusamaikram/Zapta-contactUs",
        featured: false,
        category: ProjectCategory::Portfolio,
    },
    Project {
        id: 6,
        title: "WeatherMate – API Integration Project",
        description: "A lightweight weather app built to implement core logic for fetching and \
            displaying real-time weather data from a free public API. Focused on handling API \
            requests, data parsing, and dynamic updates rather than detailed UI design.",
        tags: &["React.js", "Jsx", "Tailwind CSS"],
        live_url: "https://gmhs-minchinabad.vercel.app/",
        github_url: "https://github.com/chusamaikram/weather-app",
        featured: false,
        category: ProjectCategory::WebApp,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(filter: ProjectFilter) -> Vec<u32> {
        filter_projects(PROJECTS, filter)
            .into_iter()
            .map(|p| p.id)
            .collect()
    }

    #[test]
    fn test_filter_all_keeps_order() {
        assert_eq!(ids(ProjectFilter::All), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_featured() {
        assert_eq!(ids(ProjectFilter::Featured), vec![1, 3]);
    }

    #[test]
    fn test_filter_by_category() {
        assert_eq!(ids(ProjectFilter::WebApp), vec![2, 6]);
        assert_eq!(ids(ProjectFilter::Dashboard), vec![3]);
    }

    #[test]
    fn test_blank_tags_hidden() {
        let tags: Vec<_> = PROJECTS[0].visible_tags().collect();
        assert_eq!(
            tags,
            vec!["React.js", "javascript", "Tailwind CSS", "Framer Motion"]
        );
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = ProjectFilter::default();
        for expected in ProjectFilter::ALL.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), ProjectFilter::All);
    }
}
