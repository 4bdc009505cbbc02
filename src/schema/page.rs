use poem_openapi::{payload::Json, ApiResponse, Object};
use serde::{Deserialize, Serialize};

use super::{
    about::{AboutDetail, HeroContentPayload},
    common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    contact::ContactDetail,
    project::ProjectDetail,
};
use crate::model::project::ProjectCategory;

pub const ALL_CATEGORIES: &str = "all";
pub const FEATURED_LIMIT: u32 = 3;
pub const RELATED_LIMIT: u32 = 3;

#[derive(Object, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Filter options for the projects page, "all" first.
pub fn category_options() -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All Projects".to_string(),
    }];
    options.extend(ProjectCategory::ALL.iter().map(|x| CategoryOption {
        value: x.as_str().to_string(),
        label: x.label().to_string(),
    }));
    options
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct HomePage {
    pub hero: Option<HeroContentPayload>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub featured_projects: Vec<ProjectDetail>,
    pub contact: Option<ContactDetail>,
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct AboutPage {
    /// false renders the "not available" state
    pub available: bool,
    pub about: Option<AboutDetail>,
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct ProjectsPage {
    pub category: String,
    pub categories: Vec<CategoryOption>,
    pub projects: Vec<ProjectDetail>,
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct ProjectPage {
    pub project: ProjectDetail,
    pub related: Vec<ProjectDetail>,
}

#[derive(Object, Deserialize, Serialize, Clone, Debug)]
pub struct ContactPage {
    pub available: bool,
    pub contact: Option<ContactDetail>,
}

#[derive(ApiResponse)]
pub enum HomePageResponses {
    #[oai(status = 200)]
    Ok(Json<HomePage>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum AboutPageResponses {
    #[oai(status = 200)]
    Ok(Json<AboutPage>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ProjectsPageResponses {
    #[oai(status = 200)]
    Ok(Json<ProjectsPage>),

    #[oai(status = 400)]
    BadRequest(Json<BadRequestResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[allow(clippy::large_enum_variant)]
#[derive(ApiResponse)]
pub enum ProjectPageResponses {
    #[oai(status = 200)]
    Ok(Json<ProjectPage>),

    #[oai(status = 404)]
    NotFound(Json<NotFoundResponse>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ContactPageResponses {
    #[oai(status = 200)]
    Ok(Json<ContactPage>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_options() {
        let options = category_options();
        assert_eq!(options.len(), ProjectCategory::ALL.len() + 1);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "All Projects");
        assert!(options
            .iter()
            .any(|x| x.value == "web-design" && x.label == "Web Design"));
    }
}
