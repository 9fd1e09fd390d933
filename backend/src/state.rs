use crate::{
    config::Config,
    models::auth::{SigninBody, SignupBody, SIGNIN_FIELDS, SIGNUP_FIELDS},
    pipes::ValidationPipe,
    schema::TypedSchema,
};

/// Shared application state: configuration plus the per-route validation
/// pipes, all built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pipes: RoutePipes,
}

/// One validation pipe per body-carrying route.
#[derive(Clone)]
pub struct RoutePipes {
    pub signin: ValidationPipe,
    pub signup: ValidationPipe,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pipes: RoutePipes::default(),
        }
    }
}

impl Default for RoutePipes {
    fn default() -> Self {
        Self {
            signin: ValidationPipe::new(TypedSchema::<SigninBody>::new(SIGNIN_FIELDS)),
            signup: ValidationPipe::new(TypedSchema::<SignupBody>::new(SIGNUP_FIELDS)),
        }
    }
}
