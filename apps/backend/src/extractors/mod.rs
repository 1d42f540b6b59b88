pub mod auth_token;
pub mod current_user;
pub mod jwt;
pub mod validated_json;
