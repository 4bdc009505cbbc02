use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::{
    scene::{
        generator::{generate_scene, SceneOptions, MAX_ORNAMENT_COUNT},
        input::Viewport,
        ornament::DEFAULT_ORNAMENT_COUNT,
        surface::{DEFAULT_SEGMENTS, MAX_SEGMENTS},
    },
    schema::{
        common::BadRequestResponse,
        scene::{SceneDescriptor, SceneResponses},
    },
};

#[derive(Tags)]
enum ApiSceneTags {
    Scene,
}

pub struct ApiScene;

#[OpenApi]
impl ApiScene {
    /// Generate the decorative hero scene. Pass `seed` for a repeatable layout.
    #[oai(path = "/hero/scene", method = "get", tag = "ApiSceneTags::Scene")]
    async fn hero_scene_api(
        &self,
        Query(count): Query<Option<u32>>,
        Query(seed): Query<Option<u64>>,
        Query(segments): Query<Option<u32>>,
    ) -> SceneResponses {
        let count = count.map(|x| x as usize).unwrap_or(DEFAULT_ORNAMENT_COUNT);
        if count > MAX_ORNAMENT_COUNT {
            return SceneResponses::BadRequest(Json(BadRequestResponse {
                message: format!("count must be at most {}", MAX_ORNAMENT_COUNT),
            }));
        }
        let segments = segments.unwrap_or(DEFAULT_SEGMENTS);
        if segments == 0 || segments > MAX_SEGMENTS {
            return SceneResponses::BadRequest(Json(BadRequestResponse {
                message: format!("segments must be between 1 and {}", MAX_SEGMENTS),
            }));
        }

        let options = SceneOptions {
            ornament_count: count,
            surface_segments: segments,
            seed,
        };
        let state = match seed {
            Some(seed) => generate_scene(
                &mut StdRng::seed_from_u64(seed),
                &options,
                Viewport::default(),
            ),
            None => generate_scene(&mut rand::rng(), &options, Viewport::default()),
        };
        debug!(count, segments, ?seed, "hero scene generated");
        SceneResponses::Ok(Json(SceneDescriptor::new(&state, seed)))
    }
}
