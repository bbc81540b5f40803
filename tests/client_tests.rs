mod common;

use serde_json::{json, Value};

use xtream_api::{
    CamelCaseSerializer, Filter, JsonApiSerializer, MapError, RawSerializer,
    StandardizedSerializer, StreamDescriptor, XtreamClient, XtreamError,
};

fn to_value<T: serde::Serialize>(output: T) -> Value {
    serde_json::to_value(output).expect("Output is serializable")
}

// ============================================================================
// Raw
// ============================================================================

#[tokio::test]
async fn test_raw_profile_and_server_info() {
    let client = common::client(RawSerializer).await;

    assert_eq!(client.serializer_name(), "none");
    assert_eq!(client.get_profile().await.unwrap(), common::profile());
    assert_eq!(client.get_server_info().await.unwrap(), common::server_info());
}

#[tokio::test]
async fn test_raw_channels_carry_stream_urls() {
    let client = common::client(RawSerializer).await;
    let server = client.credentials().server.clone();

    let channels = client.get_channels(&Filter::default()).await.unwrap();
    let channels = channels.as_array().unwrap();

    assert_eq!(channels.len(), 4);
    assert_eq!(
        channels[0]["url"],
        json!(format!("{}/live/test/password/1.ts", server))
    );
    assert_eq!(channels[0]["epg_channel_id"], "C679.262.ersatztv.org");
}

#[tokio::test]
async fn test_raw_listings_can_be_paged() {
    let client = common::client(RawSerializer).await;

    let page1 = client.get_channels(&Filter::default().page(1, 1)).await.unwrap();
    let page2 = client.get_channels(&Filter::default().page(2, 1)).await.unwrap();

    assert_eq!(page1.as_array().unwrap().len(), 1);
    assert_eq!(page2.as_array().unwrap().len(), 1);
    assert_eq!(page1[0]["stream_id"], 1);
    assert_eq!(page2[0]["stream_id"], 2);

    let movies = client.get_movies(&Filter::default().page(1, 1)).await.unwrap();
    assert_eq!(movies.as_array().unwrap().len(), 1);

    let shows = client.get_shows(&Filter::default().page(1, 1)).await.unwrap();
    assert_eq!(shows.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_raw_listings_filter_by_category() {
    let client = common::client(RawSerializer).await;
    let filter = Filter::category("2");

    let channels = client.get_channels(&filter).await.unwrap();
    let movies = client.get_movies(&filter).await.unwrap();
    let shows = client.get_shows(&filter).await.unwrap();

    assert_eq!(channels.as_array().unwrap().len(), 1);
    assert_eq!(movies.as_array().unwrap().len(), 1);
    assert_eq!(shows.as_array().unwrap().len(), 1);
    assert_eq!(shows[0]["series_id"], 16083);
}

#[tokio::test]
async fn test_raw_movie_and_show_details() {
    let client = common::client(RawSerializer).await;
    let server = client.credentials().server.clone();

    let movie = client.get_movie("1").await.unwrap();
    assert_eq!(
        movie["url"],
        json!(format!("{}/movie/test/password/935703.mkv", server))
    );

    let show = client.get_show("1").await.unwrap();
    assert_eq!(show["info"]["series_id"], 16083);
    assert_eq!(
        show["episodes"]["1"][0]["url"],
        json!(format!("{}/series/test/password/935666.mp4", server))
    );
}

#[tokio::test]
async fn test_raw_shows_have_no_url() {
    let client = common::client(RawSerializer).await;

    let shows = client.get_shows(&Filter::default()).await.unwrap();
    assert!(shows[0].get("url").is_none());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_missing_movie_is_not_found() {
    let client = common::client(RawSerializer).await;

    let err = client.get_movie("1000").await.unwrap_err();
    assert!(matches!(err, XtreamError::NotFound("Movie")));
    assert_eq!(err.to_string(), "Movie Not Found");
}

#[tokio::test]
async fn test_missing_show_is_not_found() {
    let client = common::client(StandardizedSerializer).await;

    let err = client.get_show("1000").await.unwrap_err();
    assert_eq!(err.to_string(), "Show Not Found");
}

#[tokio::test]
async fn test_show_without_series_id_is_a_map_error() {
    let client = common::client(StandardizedSerializer).await;

    let err = client.get_show("4000").await.unwrap_err();
    assert!(matches!(
        err,
        XtreamError::Map(MapError::MissingIdentity { entity: "show", field: "series_id" })
    ));
}

#[tokio::test]
async fn test_raw_show_without_series_id_is_unchanged() {
    let client = common::client(RawSerializer).await;

    let show = client.get_show("4000").await.unwrap();
    assert_eq!(show["info"]["category_id"], "2");
    assert!(show["info"].get("series_id").is_none());
}

#[tokio::test]
async fn test_http_error_status() {
    let server = common::spawn_provider().await;
    let client = XtreamClient::new(common::credentials(&server, "error")).unwrap();

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, XtreamError::Http { status: 404, .. }));
    assert_eq!(err.to_string(), "Not Found");
}

// ============================================================================
// Camel case
// ============================================================================

#[tokio::test]
async fn test_camel_case_keys() {
    let client = common::client(CamelCaseSerializer).await;
    assert_eq!(client.serializer_name(), "Camel Case");

    let profile = client.get_profile().await.unwrap();
    assert_eq!(profile["expDate"], "1767542400");
    assert_eq!(profile["allowedOutputFormats"], json!(["m3u8", "ts", "rtmp"]));
    assert!(profile.get("exp_date").is_none());

    let channels = client.get_channels(&Filter::default()).await.unwrap();
    assert_eq!(channels[0]["streamId"], 1);
    assert_eq!(channels[0]["epgChannelId"], "C679.262.ersatztv.org");

    let show = client.get_show("1").await.unwrap();
    assert_eq!(show["info"]["seriesId"], 16083);
    assert_eq!(show["episodes"]["1"][0]["info"]["durationSecs"], 2214);
    assert_eq!(show["seasons"][0]["coverBig"], "https://example-iptv.com/images/small-town-specials-large.jpg");
}

// ============================================================================
// Standardized
// ============================================================================

#[tokio::test]
async fn test_standardized_profile_and_server_info() {
    let client = common::client(StandardizedSerializer).await;
    assert_eq!(client.serializer_name(), "Standardized");

    let profile = to_value(client.get_profile().await.unwrap());
    assert_eq!(profile["id"], "testuser");
    assert_eq!(profile["isTrial"], false);
    assert_eq!(profile["maxConnections"], 5);
    assert_eq!(profile["expiresAt"], "2026-01-04T16:00:00Z");
    assert_eq!(profile["createdAt"], "2024-12-25T00:00:00Z");

    let server_info = to_value(client.get_server_info().await.unwrap());
    assert_eq!(server_info["id"], "api.example-iptv.com");
    assert_eq!(server_info["xui"], true);
    assert_eq!(server_info["timeNow"], "2025-02-26T19:45:53Z");
}

#[tokio::test]
async fn test_standardized_categories_link_parent() {
    let client = common::client(StandardizedSerializer).await;

    let categories = to_value(client.get_channel_categories().await.unwrap());
    assert_eq!(categories.as_array().unwrap().len(), 5);
    assert_eq!(categories[0], json!({ "id": "1", "name": "Sports" }));
    assert_eq!(categories[4]["parentId"], "1");
}

#[tokio::test]
async fn test_standardized_channels_and_movies() {
    let client = common::client(StandardizedSerializer).await;
    let server = client.credentials().server.clone();

    let channels = to_value(client.get_channels(&Filter::default()).await.unwrap());
    assert_eq!(channels[0]["id"], "1");
    assert_eq!(channels[0]["categoryIds"], json!(["1"]));
    assert_eq!(channels[0]["tvArchive"], false);
    assert_eq!(channels[0]["url"], json!(format!("{}/live/test/password/1.ts", server)));

    let movies = to_value(client.get_movies(&Filter::default()).await.unwrap());
    assert_eq!(movies[0]["id"], "935703");
    assert_eq!(movies[0]["duration"], 6540);
    assert_eq!(movies[0]["genre"], json!(["Adventure", "Comedy", "Drama"]));
    assert_eq!(movies[0]["releaseDate"], "2024-06-15T00:00:00Z");

    let movie = to_value(client.get_movie("1").await.unwrap());
    assert_eq!(movie["id"], "935703");
    assert_eq!(movie["name"], "Summer Adventure");
    assert_eq!(movie["containerExtension"], "mkv");
    assert_eq!(movie["rating"]["mpaa"], "PG-13");
}

#[tokio::test]
async fn test_standardized_show_nests_seasons_and_episodes() {
    let client = common::client(StandardizedSerializer).await;

    let show = to_value(client.get_show("1").await.unwrap());
    assert_eq!(show["id"], "16083");

    let seasons = show["seasons"].as_array().unwrap();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0]["name"], "Specials");
    assert_eq!(seasons[0]["episodes"], json!([]));
    assert_eq!(seasons[0]["cover"], "https://example-iptv.com/images/small-town-specials-large.jpg");

    let episodes = seasons[1]["episodes"].as_array().unwrap();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0]["id"], "935666");
    assert_eq!(episodes[0]["seasonId"], "382546");
    assert_eq!(episodes[0]["showId"], "16083");
    assert_eq!(episodes[0]["duration"], 2214);
}

#[tokio::test]
async fn test_standardized_season_cover_falls_back_to_tmdb() {
    let client = common::client(StandardizedSerializer).await;

    let show = to_value(client.get_show("2000").await.unwrap());
    assert_eq!(
        show["seasons"][0]["cover"],
        "https://example-iptv.com/images/small-town-specials-large.jpg"
    );
}

#[tokio::test]
async fn test_standardized_seasons_are_synthesized() {
    let client = common::client(StandardizedSerializer).await;

    let show = to_value(client.get_show("3000").await.unwrap());
    let seasons = show["seasons"].as_array().unwrap();

    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0]["id"], "1");
    assert_eq!(seasons[0]["number"], 1);
    assert_eq!(seasons[0]["name"], "Season 1");
    assert_eq!(seasons[0]["episodes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_standardized_short_epg() {
    let client = common::client(StandardizedSerializer).await;

    let epg = to_value(client.get_short_epg("1", None).await.unwrap());
    let listings = epg.as_array().unwrap();
    assert_eq!(listings.len(), 4);
    assert_eq!(listings[0]["id"], "17528639");
    assert_eq!(listings[0]["title"], "fake programme");
    assert_eq!(listings[0]["description"], "fake description");
    assert_eq!(listings[0]["start"], "2025-03-03T13:57:02Z");
    assert_eq!(listings[0]["end"], "2025-03-03T14:33:13Z");
    assert_eq!(listings[0]["channelId"], "C679.262.ersatztv.org");

    let limited = to_value(client.get_short_epg("1", Some(2)).await.unwrap());
    assert_eq!(limited.as_array().unwrap().len(), 2);

    let empty = to_value(client.get_short_epg("1000", None).await.unwrap());
    assert_eq!(empty, json!([]));
}

#[tokio::test]
async fn test_standardized_full_epg_flags() {
    let client = common::client(StandardizedSerializer).await;

    let epg = to_value(client.get_full_epg("1").await.unwrap());
    assert_eq!(epg[0]["title"], "fake programme");
    assert_eq!(epg[0]["language"], "en");
    assert_eq!(epg[0]["hasArchive"], true);
    assert_eq!(epg[0]["nowPlaying"], false);
    assert_eq!(epg[1]["nowPlaying"], true);
    assert_eq!(epg[1]["end"], "2025-03-03T15:05:59Z");
}

// ============================================================================
// JSON:API
// ============================================================================

#[tokio::test]
async fn test_jsonapi_profile_document() {
    let client = common::client(JsonApiSerializer).await;
    assert_eq!(client.serializer_name(), "JSON:API");

    let profile = to_value(client.get_profile().await.unwrap());
    assert_eq!(profile["data"]["type"], "user-profile");
    assert_eq!(profile["data"]["id"], "testuser");
    assert_eq!(profile["data"]["attributes"]["status"], "Active");
    assert!(profile.get("included").is_none());
}

#[tokio::test]
async fn test_jsonapi_categories_relate_parent() {
    let client = common::client(JsonApiSerializer).await;

    let categories = to_value(client.get_movie_categories().await.unwrap());
    let data = categories["data"].as_array().unwrap();

    assert_eq!(data[0]["type"], "movie-category");
    assert!(data[0].get("relationships").is_none());
    assert_eq!(
        data[4]["relationships"]["parent"]["data"],
        json!({ "type": "movie-category", "id": "1" })
    );
}

#[tokio::test]
async fn test_jsonapi_listings_relate_categories() {
    let client = common::client(JsonApiSerializer).await;

    let channels = to_value(client.get_channels(&Filter::default()).await.unwrap());
    assert_eq!(channels["data"][0]["type"], "channel");
    assert_eq!(
        channels["data"][3]["relationships"]["categories"]["data"],
        json!([{ "type": "channel-category", "id": "2" }])
    );

    let movies = to_value(client.get_movies(&Filter::category("2")).await.unwrap());
    let data = movies["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "935704");
}

#[tokio::test]
async fn test_jsonapi_show_includes_seasons_then_episodes() {
    let client = common::client(JsonApiSerializer).await;

    let show = to_value(client.get_show("1").await.unwrap());
    assert_eq!(show["data"]["type"], "show");
    assert_eq!(show["data"]["id"], "16083");
    assert_eq!(
        show["data"]["relationships"]["seasons"]["data"],
        json!([
            { "type": "season", "id": "442962" },
            { "type": "season", "id": "382546" }
        ])
    );

    let included = show["included"].as_array().unwrap();
    let types: Vec<&str> = included.iter().filter_map(|r| r["type"].as_str()).collect();
    assert_eq!(types, vec!["season", "season", "episode", "episode"]);

    assert_eq!(
        included[1]["relationships"]["episodes"]["data"],
        json!([
            { "type": "episode", "id": "935666" },
            { "type": "episode", "id": "935727" }
        ])
    );
    assert_eq!(
        included[2]["relationships"]["season"]["data"],
        json!({ "type": "season", "id": "382546" })
    );
    assert_eq!(included[2]["attributes"]["title"], "Small Town Stories - S01E01");
}

#[tokio::test]
async fn test_jsonapi_epg_relates_channel() {
    let client = common::client(JsonApiSerializer).await;

    let epg = to_value(client.get_short_epg("1", Some(1)).await.unwrap());
    let data = epg["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["type"], "epg-listing");
    assert_eq!(data[0]["attributes"]["title"], "fake programme");
    assert_eq!(
        data[0]["relationships"]["channel"]["data"],
        json!({ "type": "channel", "id": "C679.262.ersatztv.org" })
    );
}

// ============================================================================
// Stream URLs
// ============================================================================

#[tokio::test]
async fn test_stream_url_uses_allowed_format() {
    let client = common::client(RawSerializer).await;
    let server = client.credentials().server.clone();

    let live = StreamDescriptor::Channel {
        id: "42".to_string(),
        timeshift: None,
    };
    assert_eq!(
        client.stream_url(&live).await.unwrap(),
        format!("{}/live/test/password/42.ts", server)
    );

    let episode = StreamDescriptor::Episode {
        id: "935666".to_string(),
        extension: "mkv".to_string(),
    };
    assert_eq!(
        client.stream_url(&episode).await.unwrap(),
        format!("{}/series/test/password/935666.mkv", server)
    );
}
