use std::process::Command;

/// The dataset contribution form. Submission is entirely out-of-band: the
/// form is serialized into an issue-creation URL and never written back into
/// the local collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetForm {
    pub name: String,
    pub description: String,
    pub links: String,
    pub size: String,
    pub tags: String,
}

impl DatasetForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Resolves the "owner/repo" slug submissions are filed against: the
/// explicit configuration value when present, otherwise guessed from a
/// GitHub Pages base URL (`https://owner.github.io/repo/...`).
pub fn resolve_repo_slug(configured: Option<&str>, base_url: &str) -> Option<String> {
    if let Some(slug) = configured {
        let slug = slug.trim().trim_matches('/');
        if !slug.is_empty() {
            return Some(slug.to_string());
        }
    }

    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))?;
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    let owner = host.strip_suffix(".github.io")?;

    let repo = path.split('/').find(|segment| !segment.is_empty());
    match repo {
        Some(repo) => Some(format!("{owner}/{repo}")),
        // User site with no path prefix: the conventional pages repo.
        None => Some(format!("{owner}/{owner}.github.io")),
    }
}

/// Builds the issue-creation URL for a dataset contribution. With no
/// resolvable slug the generic "create a new repo" page is used instead of
/// failing.
pub fn build_issue_url(form: &DatasetForm, slug: Option<&str>) -> String {
    let Some(slug) = slug else {
        return "https://github.com/new".to_string();
    };

    let title = format!("[Dataset] Contributing {}", form.name);
    let body = format!(
        "## Dataset Name\n{}\n\n## Description\n{}\n\n## Download Links\n{}\n\n## Size\n{}\n\n## Tags\n{}\n",
        form.name, form.description, form.links, form.size, form.tags
    );

    format!(
        "https://github.com/{slug}/issues/new?title={}&body={}&labels={}",
        urlencoding::encode(&title),
        urlencoding::encode(&body),
        urlencoding::encode("dataset")
    )
}

/// Hands the URL to the platform opener. Failures are reported, not fatal;
/// the caller surfaces the URL in the status line either way.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut command = Command::new("open");
        command.arg(url);
        command
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", url]);
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    };

    command.spawn().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_param(url: &str, key: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == key)
            .map(|(_, value)| urlencoding::decode(value).map(|v| v.into_owned()))?
            .ok()
    }

    #[test]
    fn issue_url_carries_title_body_and_label() {
        let form = DatasetForm {
            name: "Foo".to_string(),
            description: String::new(),
            links: "http://x".to_string(),
            size: String::new(),
            tags: String::new(),
        };
        let url = build_issue_url(&form, Some("org/repo"));

        assert!(url.starts_with("https://github.com/org/repo/issues/new?"));
        assert_eq!(
            query_param(&url, "title").as_deref(),
            Some("[Dataset] Contributing Foo")
        );
        assert_eq!(query_param(&url, "labels").as_deref(), Some("dataset"));

        let body = query_param(&url, "body").unwrap_or_default();
        assert!(body.contains("## Dataset Name\nFoo"));
        assert!(body.contains("## Download Links\nhttp://x"));
        // Blank fields still keep their section header.
        assert!(body.contains("## Size\n\n"));
    }

    #[test]
    fn missing_slug_falls_back_to_the_new_repo_page() {
        let form = DatasetForm::default();
        assert_eq!(build_issue_url(&form, None), "https://github.com/new");
    }

    #[test]
    fn explicit_slug_wins_over_the_host_guess() {
        let slug = resolve_repo_slug(Some("org/repo"), "https://someone.github.io/other");
        assert_eq!(slug.as_deref(), Some("org/repo"));
    }

    #[test]
    fn slug_is_guessed_from_a_github_pages_base() {
        assert_eq!(
            resolve_repo_slug(None, "https://szcompressor.github.io/compress-catalog/data").as_deref(),
            Some("szcompressor/compress-catalog")
        );
        assert_eq!(
            resolve_repo_slug(None, "https://someone.github.io").as_deref(),
            Some("someone/someone.github.io")
        );
        assert_eq!(resolve_repo_slug(None, "https://example.org/catalog"), None);
    }

    #[test]
    fn cleared_form_returns_to_empty_defaults() {
        let mut form = DatasetForm {
            name: "Foo".to_string(),
            tags: "hpc".to_string(),
            ..DatasetForm::default()
        };
        assert!(form.is_submittable());
        form.clear();
        assert_eq!(form, DatasetForm::default());
        assert!(!form.is_submittable());
    }
}
