//! In-process Xtream provider serving fixed fixtures on `/player_api.php`

#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use xtream_api::{Serializer, XtreamClient, XtreamCredentials};

/// Bind the mock provider on a free port and return its base URL
pub async fn spawn_provider() -> String {
    let app = Router::new().route("/player_api.php", get(player_api));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{}", addr)
}

pub fn credentials(server: &str, username: &str) -> XtreamCredentials {
    XtreamCredentials {
        server: server.to_string(),
        username: username.to_string(),
        password: "password".to_string(),
    }
}

pub async fn client<S: Serializer>(serializer: S) -> XtreamClient<S> {
    let server = spawn_provider().await;
    XtreamClient::with_serializer(credentials(&server, "test"), serializer)
        .expect("Failed to build client")
}

async fn player_api(Query(params): Query<HashMap<String, String>>) -> Response {
    let param = |name: &str| params.get(name).map(String::as_str);

    if param("username") == Some("error") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let category = param("category_id");

    let body = match param("action").unwrap_or_default() {
        "get_live_categories" | "get_vod_categories" | "get_series_categories" => categories(),
        "get_live_streams" => in_category(channels(), category),
        "get_vod_streams" => in_category(movies(), category),
        "get_series" => in_category(shows(), category),
        "get_vod_info" => match param("vod_id") {
            Some("1000") => json!({ "info": [], "movie_data": [] }),
            _ => movie(),
        },
        "get_series_info" => match param("series_id") {
            Some("1000") => show_not_found(),
            Some("2000") => {
                let mut detail = show();
                if let Some(season) = detail["seasons"][0].as_object_mut() {
                    if let Some(cover) = season.remove("cover_big") {
                        season.insert("cover_tmdb".to_string(), cover);
                    }
                }
                detail
            }
            Some("3000") => {
                let mut detail = show();
                detail["seasons"] = json!([]);
                detail
            }
            Some("4000") => {
                let mut detail = show();
                if let Some(info) = detail["info"].as_object_mut() {
                    info.remove("series_id");
                }
                detail
            }
            _ => show(),
        },
        "get_short_epg" => {
            if param("stream_id") == Some("1000") {
                json!({ "epg_listings": [] })
            } else {
                let mut listings = short_epg();
                if let Some(limit) = param("limit").and_then(|l| l.parse::<usize>().ok()) {
                    listings.truncate(limit);
                }
                json!({ "epg_listings": listings })
            }
        }
        "get_simple_data_table" => full_epg(),
        _ => json!({ "user_info": profile(), "server_info": server_info() }),
    };

    Json(body).into_response()
}

/// Keep the items listing the requested category, all of them when unfiltered
fn in_category(items: Value, category: Option<&str>) -> Value {
    let Some(category) = category.and_then(|c| c.parse::<i64>().ok()) else {
        return items;
    };

    let items = items.as_array().cloned().unwrap_or_default();
    Value::Array(
        items
            .into_iter()
            .filter(|item| {
                item["category_ids"]
                    .as_array()
                    .map(|ids| ids.iter().any(|id| id.as_i64() == Some(category)))
                    .unwrap_or(false)
            })
            .collect(),
    )
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn profile() -> Value {
    json!({
        "username": "testuser",
        "password": "testpass",
        "message": "Welcome to IPTV Service",
        "auth": 1,
        "status": "Active",
        "exp_date": "1767542400",
        "is_trial": "0",
        "active_cons": 0,
        "created_at": "1735084800",
        "max_connections": "5",
        "allowed_output_formats": ["m3u8", "ts", "rtmp"]
    })
}

pub fn server_info() -> Value {
    json!({
        "xui": true,
        "version": "1.5.13",
        "revision": null,
        "url": "api.example-iptv.com",
        "port": "2052",
        "https_port": "443",
        "server_protocol": "https",
        "rtmp_port": "8880",
        "timestamp_now": 1740599153,
        "time_now": "2025-02-26 19:45:53",
        "timezone": "UTC"
    })
}

fn categories() -> Value {
    json!([
        { "category_id": "1", "category_name": "Sports", "parent_id": 0 },
        { "category_id": "2", "category_name": "News", "parent_id": 0 },
        { "category_id": "3", "category_name": "Entertainment", "parent_id": 0 },
        { "category_id": "4", "category_name": "Documentaries", "parent_id": 0 },
        { "category_id": "5", "category_name": "Football", "parent_id": 1 }
    ])
}

fn channel(num: i64, name: &str, icon: &str, epg: &str, category: i64) -> Value {
    json!({
        "num": num,
        "name": name,
        "stream_type": "live",
        "stream_id": num,
        "stream_icon": format!("https://example-iptv.com/images/{}.png", icon),
        "epg_channel_id": epg,
        "added": "1735884153",
        "custom_sid": "",
        "tv_archive": 0,
        "direct_source": "",
        "tv_archive_duration": 0,
        "category_id": category.to_string(),
        "category_ids": [category],
        "thumbnail": ""
    })
}

fn channels() -> Value {
    json!([
        channel(1, "News 24/7", "news24", "C679.262.ersatztv.org", 1),
        channel(2, "Sports HD", "sports-hd", "C679.263.ersatztv.org", 1),
        channel(3, "Entertainment", "entertainment", "C679.264.ersatztv.org", 1),
        channel(4, "Documentaries", "documentaries", "C679.265.ersatztv.org", 2)
    ])
}

fn movies() -> Value {
    json!([
        {
            "num": 1,
            "name": "Summer Adventure (2024)",
            "title": "Summer Adventure",
            "year": "2024",
            "stream_type": "movie",
            "stream_id": 935703,
            "stream_icon": "https://example-iptv.com/images/summer-adventure.jpg",
            "rating": 5.5,
            "rating_5based": 2.8,
            "added": "1740562532",
            "plot": "Four friends embark on an unforgettable journey across the coast.",
            "cast": "John Smith, Emily Johnson, Michael Brown, Sarah Davis",
            "director": "Robert Wilson",
            "genre": "Adventure, Comedy, Drama",
            "release_date": "2024-06-15",
            "youtube_trailer": "k2qgYK1CrkQ",
            "episode_run_time": 109,
            "category_id": "1",
            "category_ids": [1],
            "container_extension": "mp4",
            "custom_sid": "",
            "direct_source": ""
        },
        {
            "num": 2,
            "name": "The Last Stand (2023)",
            "title": "The Last Stand",
            "year": "2023",
            "stream_type": "movie",
            "stream_id": 935704,
            "stream_icon": "https://example-iptv.com/images/the-last-stand.jpg",
            "rating": 7.5,
            "rating_5based": 3.8,
            "added": "1740562532",
            "plot": "A retired sheriff must protect their town from a ruthless cartel.",
            "cast": "Robert Johnson, Sarah Adams, Michael Brown, Emily Davis",
            "director": "James Wilson",
            "genre": "Action, Crime, Thriller",
            "release_date": "2023-08-22",
            "youtube_trailer": "k2qgYK1CrkQ",
            "episode_run_time": 118,
            "category_id": "2",
            "category_ids": [2],
            "container_extension": "mp4",
            "custom_sid": "",
            "direct_source": ""
        }
    ])
}

fn movie() -> Value {
    json!({
        "info": {
            "kinopoisk_url": "https://www.themoviedb.org/movie/1001",
            "tmdb_id": 1001,
            "name": "Summer Adventure",
            "o_name": "Summer Adventure",
            "cover_big": "https://example-iptv.com/images/summer-adventure-large.jpg",
            "movie_image": "https://example-iptv.com/images/summer-adventure.jpg",
            "release_date": "2024-06-15",
            "episode_run_time": 109,
            "youtube_trailer": "k2qgYK1CrkQ",
            "director": "Robert Wilson",
            "actors": "John Smith, Emily Johnson",
            "cast": "John Smith, Emily Johnson",
            "description": "Four friends embark on an unforgettable journey across the coast.",
            "plot": "Four friends embark on an unforgettable journey across the coast.",
            "age": "",
            "mpaa_rating": "PG-13",
            "country": "United States",
            "genre": "Adventure, Comedy",
            "backdrop_path": ["https://example-iptv.com/images/summer-adventure-backdrop.jpg"],
            "duration_secs": 6540,
            "duration": "01:49:00",
            "bitrate": 4500,
            "rating": 5.5
        },
        "movie_data": {
            "stream_id": 935703,
            "name": "Summer Adventure (2024)",
            "title": "Summer Adventure",
            "year": "2024",
            "added": "1740562532",
            "category_id": "1",
            "category_ids": [1],
            "container_extension": "mkv",
            "custom_sid": "",
            "direct_source": ""
        }
    })
}

fn shows() -> Value {
    json!([
        {
            "num": 1,
            "name": "Medical Heroes (2022)",
            "title": "Medical Heroes",
            "year": "2022",
            "stream_type": "series",
            "series_id": 15120,
            "cover": "https://example-iptv.com/images/medical-heroes-cover.jpg",
            "plot": "Follow the lives of dedicated medical professionals.",
            "cast": "Jennifer Adams, Richard Carter, Samantha Wright",
            "director": "",
            "genre": "Drama, Medical",
            "release_date": "2022-03-15",
            "releaseDate": "2022-03-15",
            "last_modified": "1740596715",
            "rating": "7",
            "rating_5based": 3.5,
            "backdrop_path": ["https://example-iptv.com/images/medical-heroes-backdrop.jpg"],
            "youtube_trailer": "",
            "episode_run_time": "88",
            "category_id": "1",
            "category_ids": [1]
        },
        {
            "num": 2,
            "name": "Small Town Stories (2025)",
            "title": "Small Town Stories",
            "year": "2025",
            "stream_type": "series",
            "series_id": 16083,
            "cover": "https://example-iptv.com/images/small-town-main.jpg",
            "plot": "A heartwarming drama about the residents of a close-knit small town.",
            "cast": "Elizabeth Parker, Michael Reynolds, Susan Thompson",
            "director": "",
            "genre": "Drama, Family",
            "release_date": "2025-02-24",
            "releaseDate": "2025-02-24",
            "last_modified": "1740591320",
            "rating": "0",
            "rating_5based": 0,
            "backdrop_path": ["https://example-iptv.com/images/small-town-backdrop.jpg"],
            "youtube_trailer": "",
            "episode_run_time": "37",
            "category_id": "2",
            "category_ids": [2]
        }
    ])
}

fn episode(id: &str, num: &str, date: &str, secs: i64, added: &str) -> Value {
    json!({
        "id": id,
        "episode_num": num,
        "title": format!("Small Town Stories - S01E0{}", num),
        "container_extension": "mp4",
        "info": {
            "tmdb_id": 5197445,
            "release_date": date,
            "plot": "Riverside prepares for the annual Founders Day celebration.",
            "duration_secs": secs,
            "duration": "00:36:54",
            "movie_image": format!("https://example-iptv.com/images/small-town-s01e0{}.jpg", num),
            "bitrate": 5244,
            "rating": 10,
            "season": 1,
            "cover_big": format!("https://example-iptv.com/images/small-town-s01e0{}-large.jpg", num)
        },
        "subtitles": [],
        "custom_sid": "",
        "added": added,
        "season": 1,
        "direct_source": ""
    })
}

fn show() -> Value {
    json!({
        "seasons": [
            {
                "air_date": "2025-02-17",
                "episode_count": 5,
                "id": 442962,
                "name": "Specials",
                "overview": "",
                "season_number": 0,
                "vote_average": 0,
                "cover": "https://example-iptv.com/images/small-town-specials.jpg",
                "cover_big": "https://example-iptv.com/images/small-town-specials-large.jpg"
            },
            {
                "air_date": "2025-02-24",
                "episode_count": 15,
                "id": 382546,
                "name": "Season 1",
                "overview": "",
                "season_number": 1,
                "vote_average": 10,
                "cover": "https://example-iptv.com/images/small-town-s1.jpg",
                "cover_big": "https://example-iptv.com/images/small-town-s1-large.jpg"
            }
        ],
        "info": {
            "name": "Small Town Stories (2025)",
            "title": "Small Town Stories",
            "year": "2025",
            "cover": "https://example-iptv.com/images/small-town-main.jpg",
            "plot": "A heartwarming drama about the residents of a close-knit small town.",
            "cast": "Elizabeth Parker, Michael Reynolds, Susan Thompson",
            "director": "",
            "genre": "Drama, Family",
            "release_date": "2025-02-24",
            "releaseDate": "2025-02-24",
            "last_modified": "1740591320",
            "rating": "0",
            "rating_5based": 0,
            "backdrop_path": ["https://example-iptv.com/images/small-town-backdrop.jpg"],
            "youtube_trailer": "",
            "episode_run_time": "37",
            "category_id": "2",
            "category_ids": [2],
            "series_id": 16083
        },
        "episodes": {
            "1": [
                episode("935666", "1", "2025-02-24", 2214, "1740503721"),
                episode("935727", "2", "2025-02-25", 2209, "1740591320")
            ]
        }
    })
}

fn show_not_found() -> Value {
    json!({
        "seasons": [],
        "info": {
            "name": null,
            "title": null,
            "year": null,
            "cover": null,
            "plot": null,
            "cast": null,
            "director": null,
            "genre": null,
            "release_date": null,
            "releaseDate": null,
            "last_modified": null,
            "rating": "0",
            "rating_5based": 0,
            "backdrop_path": null,
            "youtube_trailer": null,
            "episode_run_time": null,
            "category_id": "",
            "category_ids": null
        }
    })
}

fn epg_listing(id: &str, start: &str, stop: &str, start_ts: &str, stop_ts: &str) -> Value {
    json!({
        "id": id,
        "epg_id": "63",
        "title": "ZmFrZSBwcm9ncmFtbWU=",
        "lang": "",
        "start": start,
        "end": stop_ts,
        "description": "ZmFrZSBkZXNjcmlwdGlvbg==",
        "channel_id": "C679.262.ersatztv.org",
        "start_timestamp": start_ts,
        "stop_timestamp": stop_ts,
        "stop": stop
    })
}

fn short_epg() -> Vec<Value> {
    vec![
        epg_listing("17528639", "2025-03-03 13:57:02", "2025-03-03 14:33:13", "1741010222", "1741012393"),
        epg_listing("17528640", "2025-03-03 14:33:13", "2025-03-03 15:05:59", "1741012393", "1741014359"),
        epg_listing("17528641", "2025-03-03 15:05:59", "2025-03-03 16:21:09", "1741014359", "1741018869"),
        epg_listing("17528642", "2025-03-03 16:21:09", "2025-03-03 16:59:32", "1741018869", "1741021172"),
    ]
}

fn full_epg() -> Value {
    json!({
        "epg_listings": [
            {
                "id": "17528639",
                "epg_id": "63",
                "title": "ZmFrZSBwcm9ncmFtbWU=",
                "lang": "en",
                "start": "2025-03-03 13:57:02",
                "end": "2025-03-03 14:33:13",
                "description": "ZmFrZSBkZXNjcmlwdGlvbg==",
                "channel_id": "C679.262.ersatztv.org",
                "start_timestamp": "1741010222",
                "stop_timestamp": "1741012393",
                "now_playing": 0,
                "has_archive": 1
            },
            {
                "id": "17528640",
                "epg_id": "63",
                "title": "ZmFrZSBwcm9ncmFtbWU=",
                "lang": "en",
                "start": "2025-03-03 14:33:13",
                "end": "2025-03-03 15:05:59",
                "description": "ZmFrZSBkZXNjcmlwdGlvbg==",
                "channel_id": "C679.262.ersatztv.org",
                "start_timestamp": "1741012393",
                "stop_timestamp": "1741014359",
                "now_playing": 1,
                "has_archive": 0
            }
        ]
    })
}
