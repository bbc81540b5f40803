use crate::error::MapError;
use crate::models::{Entity, Profile, ServerInfo};
use crate::services::coerce::{non_empty, to_bool, to_epoch_date, to_integer};
use crate::services::xtream::types::{XtreamServerInfo, XtreamUserProfile};

/// User profile, identified by username
pub fn map_profile(profile: XtreamUserProfile) -> Result<Entity<Profile>, MapError> {
    let username = non_empty(profile.username).ok_or(MapError::MissingIdentity {
        entity: "profile",
        field: "username",
    })?;

    let attributes = Profile {
        username: username.clone(),
        password: profile.password,
        message: profile.message,
        status: profile.status,
        is_trial: to_bool(profile.is_trial.as_ref()),
        allowed_output_formats: profile.allowed_output_formats,
        max_connections: to_integer(profile.max_connections.as_ref()),
        active_connections: to_integer(profile.active_cons.as_ref()),
        created_at: to_epoch_date(profile.created_at.as_ref()),
        expires_at: to_epoch_date(profile.exp_date.as_ref()),
    };

    Ok(Entity::new(username, attributes))
}

/// Server info, identified by its url
pub fn map_server_info(server: XtreamServerInfo) -> Result<Entity<ServerInfo>, MapError> {
    let url = non_empty(server.url).ok_or(MapError::MissingIdentity {
        entity: "server info",
        field: "url",
    })?;

    let attributes = ServerInfo {
        xui: to_bool(server.xui.as_ref()),
        version: server.version,
        revision: server.revision,
        url: url.clone(),
        port: server.port,
        https_port: server.https_port,
        server_protocol: server.server_protocol,
        rtmp_port: server.rtmp_port,
        timezone: server.timezone,
        time_now: to_epoch_date(server.timestamp_now.as_ref()),
    };

    Ok(Entity::new(url, attributes))
}
