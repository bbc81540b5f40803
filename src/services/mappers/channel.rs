use crate::error::MapError;
use crate::models::{Channel, Entity, Links};
use crate::services::coerce::{non_empty, to_bool, to_epoch_date, to_integer};
use crate::services::xtream::types::XtreamChannel;

use super::{category_ids, identity};

/// Live channel
pub fn map_channel(channel: XtreamChannel) -> Result<Entity<Channel>, MapError> {
    let id = identity("channel", "stream_id", channel.stream_id.as_ref())?;
    let categories = category_ids(&channel.category_ids, channel.category_id.as_deref());

    let attributes = Channel {
        number: to_integer(channel.num.as_ref()),
        name: channel.name,
        logo: non_empty(channel.stream_icon),
        thumbnail: non_empty(channel.thumbnail),
        epg_id: non_empty(channel.epg_channel_id),
        tv_archive: to_bool(channel.tv_archive.as_ref()),
        tv_archive_duration: to_integer(channel.tv_archive_duration.as_ref()),
        custom_sid: non_empty(channel.custom_sid),
        direct_source: non_empty(channel.direct_source),
        url: channel.url,
        created_at: to_epoch_date(channel.added.as_ref()),
    };

    Ok(Entity::new(id, attributes).with_links(Links {
        category_ids: Some(categories),
        ..Default::default()
    }))
}
