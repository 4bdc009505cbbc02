use std::{str::FromStr, sync::Arc};

use poem::web::Data;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::{
    model::project::ProjectCategory,
    repository::{
        about::get_about,
        contact::get_contact,
        project::{get_all_project, get_project_by_slug, get_related_project},
    },
    schema::{
        about::AboutDetail,
        common::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
        page::{
            category_options, AboutPage, AboutPageResponses, ContactPage, ContactPageResponses,
            HomePage, HomePageResponses, ProjectPage, ProjectPageResponses, ProjectsPage,
            ProjectsPageResponses, ALL_CATEGORIES, FEATURED_LIMIT, RELATED_LIMIT,
        },
        project::ProjectDetail,
    },
    AppState,
};

#[derive(Tags)]
enum ApiPageTags {
    Page,
}

pub struct ApiPage;

#[OpenApi]
impl ApiPage {
    #[oai(path = "/pages/home", method = "get", tag = "ApiPageTags::Page")]
    async fn home_page_api(&self, state: Data<&Arc<AppState>>) -> HomePageResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return HomePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "home_page_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let about = match get_about(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return HomePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "home_page_api",
                        "get_about",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let featured = match get_all_project(&mut tx, None, Some(true), Some(FEATURED_LIMIT)).await
        {
            Ok(val) => val,
            Err(err) => {
                return HomePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "home_page_api",
                        "get_all_project",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let contact = match get_contact(&mut tx).await {
            Ok(val) => val,
            Err(err) => {
                return HomePageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "home_page_api",
                        "get_contact",
                        &err.to_string(),
                    ),
                ))
            }
        };

        let about = about.map(AboutDetail::from);
        HomePageResponses::Ok(Json(HomePage {
            hero: about.as_ref().and_then(|x| x.hero.clone()),
            bio: about.as_ref().map(|x| x.bio.clone()),
            skills: about.map(|x| x.skills).unwrap_or_default(),
            featured_projects: featured.into_iter().map(ProjectDetail::from).collect(),
            contact: contact.map(Into::into),
        }))
    }

    #[oai(path = "/pages/about", method = "get", tag = "ApiPageTags::Page")]
    async fn about_page_api(&self, state: Data<&Arc<AppState>>) -> AboutPageResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return AboutPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "about_page_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        match get_about(&mut tx).await {
            Ok(val) => AboutPageResponses::Ok(Json(AboutPage {
                available: val.is_some(),
                about: val.map(Into::into),
            })),
            Err(err) => AboutPageResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.page",
                    "about_page_api",
                    "get_about",
                    &err.to_string(),
                ),
            )),
        }
    }

    #[oai(path = "/pages/projects", method = "get", tag = "ApiPageTags::Page")]
    async fn projects_page_api(
        &self,
        Query(category): Query<Option<String>>,
        Query(featured): Query<Option<bool>>,
        Query(limit): Query<Option<u32>>,
        state: Data<&Arc<AppState>>,
    ) -> ProjectsPageResponses {
        let category = category.unwrap_or(ALL_CATEGORIES.to_string());
        if category != ALL_CATEGORIES {
            if let Err(message) = ProjectCategory::from_str(&category) {
                return ProjectsPageResponses::BadRequest(Json(BadRequestResponse { message }));
            }
        }

        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProjectsPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "projects_page_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let data = match get_all_project(&mut tx, Some(category.clone()), featured, limit).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectsPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "projects_page_api",
                        "get_all_project",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ProjectsPageResponses::Ok(Json(ProjectsPage {
            category,
            categories: category_options(),
            projects: data.into_iter().map(ProjectDetail::from).collect(),
        }))
    }

    #[oai(path = "/pages/projects/:slug", method = "get", tag = "ApiPageTags::Page")]
    async fn project_page_api(
        &self,
        Path(slug): Path<String>,
        state: Data<&Arc<AppState>>,
    ) -> ProjectPageResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ProjectPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "project_page_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        let project = match get_project_by_slug(&mut tx, &slug).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "project_page_api",
                        "get_project_by_slug",
                        &err.to_string(),
                    ),
                ))
            }
        };
        let Some(project) = project else {
            return ProjectPageResponses::NotFound(Json(NotFoundResponse {
                message: format!("project {} not found", slug),
            }));
        };

        let related = match get_related_project(&mut tx, &project, RELATED_LIMIT).await {
            Ok(val) => val,
            Err(err) => {
                return ProjectPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "project_page_api",
                        "get_related_project",
                        &err.to_string(),
                    ),
                ))
            }
        };

        ProjectPageResponses::Ok(Json(ProjectPage {
            project: project.into(),
            related: related.into_iter().map(ProjectDetail::from).collect(),
        }))
    }

    #[oai(path = "/pages/contact", method = "get", tag = "ApiPageTags::Page")]
    async fn contact_page_api(&self, state: Data<&Arc<AppState>>) -> ContactPageResponses {
        // Begin db transaction
        let mut tx = match state.db.begin().await {
            Ok(val) => val,
            Err(err) => {
                return ContactPageResponses::InternalServerError(Json(
                    InternalServerErrorResponse::new(
                        "route.page",
                        "contact_page_api",
                        "begin transaction",
                        &err.to_string(),
                    ),
                ));
            }
        };

        match get_contact(&mut tx).await {
            Ok(val) => ContactPageResponses::Ok(Json(ContactPage {
                available: val.is_some(),
                contact: val.map(Into::into),
            })),
            Err(err) => ContactPageResponses::InternalServerError(Json(
                InternalServerErrorResponse::new(
                    "route.page",
                    "contact_page_api",
                    "get_contact",
                    &err.to_string(),
                ),
            )),
        }
    }
}
