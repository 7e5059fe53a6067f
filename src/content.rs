use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

static GLOBAL_SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("{0} must have at least one entry")]
    Empty(&'static str),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub secondary_link: Option<Link>,
    #[serde(default)]
    pub tertiary_link: Option<Link>,
}

/// A skill is written either as a bare name or as a `{name, detail}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    Name(String),
    Detail { name: String, detail: String },
}

impl Skill {
    pub fn name(&self) -> &str {
        match self {
            Skill::Name(name) | Skill::Detail { name, .. } => name,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Skill::Name(_) => None,
            Skill::Detail { detail, .. } => Some(detail.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub description: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub heading: String,
    pub blurb: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<Phone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub chips: Vec<String>,
    pub summary: String,
    pub achievements: Vec<String>,
    #[serde(default)]
    pub hero_video: Option<String>,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub faqs: Vec<FaqItem>,
    pub testimonials: Vec<Testimonial>,
}

/// Returns the embedded site content, parsing and validating it on first use.
pub fn site() -> Result<&'static SiteContent, ContentError> {
    GLOBAL_SITE_CONTENT.as_ref().map_err(Clone::clone)
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: read("profile.json")?,
            projects: read("projects.json")?,
            skills: read("skills.json")?,
            faqs: read("faqs.json")?,
            testimonials: read("testimonials.json")?,
        };
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        non_empty("roles", &self.profile.roles)?;
        non_empty("projects", &self.projects)?;
        non_empty("skills", &self.skills)?;
        non_empty("faqs", &self.faqs)?;
        non_empty("testimonials", &self.testimonials)?;
        unique_ids("faq", self.faqs.iter().map(|f| f.id.as_str()))?;
        unique_ids("testimonial", self.testimonials.iter().map(|t| t.id))?;
        Ok(())
    }
}

fn read<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let data = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    parse(file, &data.data)
}

fn parse<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(bytes).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

fn non_empty<T>(kind: &'static str, items: &[T]) -> Result<(), ContentError> {
    if items.is_empty() {
        Err(ContentError::Empty(kind))
    } else {
        Ok(())
    }
}

fn unique_ids<I>(kind: &'static str, ids: impl Iterator<Item = I>) -> Result<(), ContentError>
where
    I: Eq + Hash + ToString,
{
    let mut seen = HashSet::new();
    for id in ids {
        let repr = id.to_string();
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { kind, id: repr });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = site().expect("embedded content should be valid");
        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.roles.is_empty());
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.faqs[0].id, "background");

        // Optional fields are honored per project
        let meridex = &content.projects[1];
        assert!(meridex.video_url.is_none());
        assert!(meridex.tertiary_link.is_none());
        assert_eq!(
            meridex.secondary_link.as_ref().map(|l| l.text.as_str()),
            Some("View Case Study")
        );
    }

    #[test]
    fn test_skills_accept_names_and_details() {
        let json = r#"[
            {
                "title": "Frontend",
                "description": "UI",
                "skills": ["HTML", { "name": "React", "detail": "Hooks" }]
            }
        ]"#;
        let categories: Vec<SkillCategory> =
            parse("skills.json", json.as_bytes()).expect("should parse skills");
        let skills = &categories[0].skills;
        assert_eq!(skills[0], Skill::Name("HTML".to_string()));
        assert_eq!(skills[0].detail(), None);
        assert_eq!(skills[1].name(), "React");
        assert_eq!(skills[1].detail(), Some("Hooks"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse::<Vec<FaqItem>>("faqs.json", b"{ not json").unwrap_err();
        match err {
            ContentError::Parse { file, .. } => assert_eq!(file, "faqs.json"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read::<Vec<FaqItem>>("nope.json").unwrap_err();
        assert_eq!(err, ContentError::NotFound("nope.json".to_string()));
    }

    #[test]
    fn test_validate_rejects_empty_lists() {
        let mut content = SiteContent::load().expect("embedded content should be valid");
        content.testimonials.clear();
        assert_eq!(
            content.validate(),
            Err(ContentError::Empty("testimonials"))
        );

        let mut content = SiteContent::load().expect("embedded content should be valid");
        content.profile.roles.clear();
        assert_eq!(content.validate(), Err(ContentError::Empty("roles")));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut content = SiteContent::load().expect("embedded content should be valid");
        let dup = content.faqs[0].clone();
        content.faqs.push(dup);
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateId {
                kind: "faq",
                id: "background".to_string()
            })
        );

        let mut content = SiteContent::load().expect("embedded content should be valid");
        content.testimonials[2].id = 1;
        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateId {
                kind: "testimonial",
                id: "1".to_string()
            })
        );
    }
}
