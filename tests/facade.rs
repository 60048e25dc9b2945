use std::sync::Arc;
use std::time::Duration;

use rsblox_lib::types::{
    FriendStatus, GameDetails, PresenceType, ServerType, ThumbnailSize, ThumbnailType, TrayGame,
};
use rsblox_lib::{BridgeError, Client, MockTransport};
use serde_json::{json, Value};

fn client(mock: &MockTransport) -> Client {
    Client::with_transport(Arc::new(mock.clone()), 10)
}

fn game_details_json() -> Value {
    json!({
        "universe_id": 65241,
        "root_place_id": 189707,
        "name": "Natural Disaster Survival",
        "description": null,
        "source_name": "Natural Disaster Survival",
        "source_description": "Survive!",
        "creator": {
            "id": 80119,
            "name": "Stickmasterluke",
            "creator_type": "User",
            "is_rnv_account": false,
            "has_verified_badge": true
        },
        "price": null,
        "allowed_gear_genres": ["All"],
        "allowed_gear_categories": [],
        "is_genre_enforced": false,
        "copying_allowed": false,
        "playing": 4000,
        "visits": 3000000000u64,
        "max_players": 30,
        "created": "2008-01-01T00:00:00Z",
        "updated": "2024-01-01T00:00:00Z",
        "universe_avatar_type": "MorphToR15",
        "genre": "All",
        "is_all_genre": true,
        "is_favorited_by_user": false,
        "favorited_count": 12
    })
}

#[tokio::test]
async fn each_method_sends_one_exact_command() {
    let mock = MockTransport::returning(Value::Null);
    let api = client(&mock);
    let roblox = api.roblox();

    roblox.auth("cookie").await.unwrap();
    roblox.update_presence().await.unwrap();
    roblox.friend(1).await.unwrap();
    roblox.unfriend(2).await.unwrap();
    roblox.accept_friend_request(3).await.unwrap();
    roblox.decline_friend_request(4).await.unwrap();
    assert_eq!(roblox.play_place(189707).await.unwrap(), None);
    assert_eq!(roblox.play_server(189707, "abc").await.unwrap(), None);
    api.tray()
        .set_games(vec![TrayGame { id: 189707, title: "NDS".into() }])
        .await
        .unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            ("plugin:roblox-api|auth".to_string(), json!({ "roblosecurity": "cookie" })),
            ("plugin:roblox-api|presence".to_string(), json!({})),
            ("plugin:roblox-api|friend".to_string(), json!({ "userId": 1 })),
            ("plugin:roblox-api|unfriend".to_string(), json!({ "userId": 2 })),
            ("plugin:roblox-api|accept_friend_request".to_string(), json!({ "userId": 3 })),
            ("plugin:roblox-api|decline_friend_request".to_string(), json!({ "userId": 4 })),
            ("plugin:roblox-api|open_place".to_string(), json!({ "placeId": 189707 })),
            (
                "plugin:roblox-api|open_server".to_string(),
                json!({ "placeId": 189707, "gameId": "abc" })
            ),
            (
                "plugin:tray-api|tray_update".to_string(),
                json!({ "games": [{ "id": 189707, "title": "NDS" }] })
            ),
        ]
    );
}

#[tokio::test]
async fn list_and_detail_lookups_use_fixed_names() {
    // An empty list decodes for every list-returning command and fails to
    // decode for the single-record ones, which still leaves a recorded call.
    let mock = MockTransport::returning(json!([]));
    let roblox = client(&mock).roblox().clone();

    roblox.get_friends_list().await.unwrap();
    roblox.get_users_friends_list(156).await.unwrap();
    roblox.get_recommendations().await.unwrap();
    roblox.get_game_media(65241).await.unwrap();
    assert!(matches!(
        roblox.get_user_details(156).await,
        Err(BridgeError::Decode(_))
    ));
    assert!(matches!(
        roblox.get_place_details(189707).await,
        Err(BridgeError::Decode(_))
    ));

    assert_eq!(
        mock.calls(),
        vec![
            ("plugin:roblox-api|friends_list".to_string(), json!({})),
            ("plugin:roblox-api|users_friends_list".to_string(), json!({ "userId": 156 })),
            ("plugin:roblox-api|recommendations".to_string(), json!({})),
            ("plugin:roblox-api|game_media".to_string(), json!({ "universeId": 65241 })),
            ("plugin:roblox-api|get_user".to_string(), json!({ "userId": 156 })),
            ("plugin:roblox-api|place_details".to_string(), json!({ "placeId": 189707 })),
        ]
    );
}

#[tokio::test]
async fn lookups_decode_declared_shapes() {
    let mock = MockTransport::new(|command, _| async move {
        let payload = match command.as_str() {
            "plugin:roblox-api|is_authed" => json!(true),
            "plugin:roblox-api|get_me" => json!({
                "user_id": 1, "username": "Roblox", "display_name": "Roblox", "robux": 50
            }),
            "plugin:roblox-api|get_user_stats" => json!({
                "friends": 3, "followers": 10, "followings": 2
            }),
            "plugin:roblox-api|friend_status" => json!("RequestReceived"),
            "plugin:roblox-api|get_presences" => json!([{
                "user_id": 7,
                "presence_type": "InStudio",
                "last_online": "2024-03-01T10:00:00Z",
                "last_location": "Studio"
            }]),
            "plugin:roblox-api|game_details" => game_details_json(),
            "plugin:roblox-api|get_headshots" => json!(["https://tr.rbxcdn.com/a"]),
            other => return Err(BridgeError::Transport(format!("Unknown command {other}"))),
        };
        Ok(payload)
    });
    let roblox = client(&mock).roblox().clone();

    assert!(roblox.is_authed().await.unwrap());
    assert_eq!(roblox.get_me().await.unwrap().robux, 50);
    assert_eq!(roblox.get_user_stats(1).await.unwrap().followers, 10);
    assert_eq!(roblox.get_friend_status(1).await.unwrap(), FriendStatus::RequestReceived);

    let presences = roblox.get_presences(vec![7]).await.unwrap();
    assert_eq!(presences[0].presence_type, PresenceType::InStudio);

    let game = roblox.get_game_details(65241).await.unwrap();
    assert_eq!(game.creator.name, "Stickmasterluke");
    assert_eq!(
        TrayGame::from(&game),
        TrayGame { id: 189707, title: "Natural Disaster Survival".into() }
    );

    assert_eq!(roblox.get_avatars_headshots(vec![7]).await.unwrap().len(), 1);

    let calls = mock.calls();
    let names: Vec<&str> = calls.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "plugin:roblox-api|is_authed",
            "plugin:roblox-api|get_me",
            "plugin:roblox-api|get_user_stats",
            "plugin:roblox-api|friend_status",
            "plugin:roblox-api|get_presences",
            "plugin:roblox-api|game_details",
            "plugin:roblox-api|get_headshots",
        ]
    );
    assert_eq!(calls[0].1, json!({}));
    assert_eq!(calls[4].1, json!({ "userIds": [7] }));
    assert_eq!(calls[5].1, json!({ "universeId": 65241 }));
    assert_eq!(calls[6].1, json!({ "avatarIds": [7] }));
}

#[tokio::test]
async fn launch_may_echo_game() {
    let mock = MockTransport::returning(game_details_json());
    let launched: Option<GameDetails> = client(&mock).roblox().play_place(189707).await.unwrap();
    assert_eq!(launched.map(|g| g.universe_id), Some(65241));
}

#[tokio::test]
async fn faults_pass_through_unchanged() {
    let mock = MockTransport::new(|_, _| async {
        Err::<Value, _>(BridgeError::fault(json!({ "kind": "RoblosecurityNotSet" })))
    });
    let api = client(&mock);

    let err = api.roblox().get_friends_list().await.unwrap_err();
    assert_eq!(
        err.as_fault().map(|f| f.0.clone()),
        Some(json!({ "kind": "RoblosecurityNotSet" }))
    );

    let err = api.tray().set_games(vec![]).await.unwrap_err();
    assert!(matches!(err, BridgeError::Fault(_)));
    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn mismatched_payload_is_a_decode_error() {
    let mock = MockTransport::returning(json!("yes"));
    let err = client(&mock).roblox().is_authed().await.unwrap_err();
    assert!(matches!(err, BridgeError::Decode(_)));
}

#[tokio::test]
async fn server_pages_follow_the_cursor() {
    const PAGE: usize = 10;
    let corpus: Vec<String> = (0..25).map(|i| format!("server-{i}")).collect();

    let mock = MockTransport::new(move |_, args| {
        let corpus = corpus.clone();
        async move {
            let start = match args["cursor"].as_str() {
                Some(cursor) => cursor
                    .parse::<usize>()
                    .map_err(|_| BridgeError::fault("Bad cursor"))?,
                None => 0,
            };
            let end = (start + PAGE).min(corpus.len());
            let servers: Vec<Value> = corpus[start..end]
                .iter()
                .map(|id| {
                    json!({
                        "id": id, "max_players": 10, "playing": 3,
                        "player_tokens": [], "fps": 60.0, "ping": 50
                    })
                })
                .collect();
            let next = (end < corpus.len()).then(|| end.to_string());
            Ok::<Value, BridgeError>(json!([servers, next]))
        }
    });
    let roblox = client(&mock).roblox().clone();

    let (first, cursor) = roblox
        .get_game_servers(1818, ServerType::Public, None)
        .await
        .unwrap();
    let (second, _) = roblox
        .get_game_servers(1818, ServerType::Public, cursor.clone())
        .await
        .unwrap();
    let (third, last) = roblox
        .get_game_servers(1818, ServerType::Public, Some("20".into()))
        .await
        .unwrap();

    assert_eq!(cursor.as_deref(), Some("10"));
    assert_eq!(first.len(), 10);
    assert_eq!(first[9].id, "server-9");
    assert_eq!(second[0].id, "server-10");
    assert_eq!(third.len(), 5);
    assert_eq!(last, None);

    let calls = mock.calls();
    assert!(calls.iter().all(|(name, _)| name == "plugin:roblox-api|game_servers"));
    assert_eq!(
        calls[0].1,
        json!({ "placeId": 1818, "serversType": "Public", "cursor": null })
    );
    assert_eq!(calls[1].1["cursor"], json!("10"));
}

#[tokio::test]
async fn thumbnails_are_chunked_and_reassembled() {
    let mock = MockTransport::new(|_, args| async move {
        let ids: Vec<u64> = serde_json::from_value(args["ids"].clone())?;
        // Later chunks answer first.
        tokio::time::sleep(Duration::from_millis(40 - ids[0].min(40))).await;
        let urls: Vec<String> = ids.iter().map(|id| format!("https://tr.rbxcdn.com/{id}")).collect();
        Ok::<Value, BridgeError>(json!(urls))
    });

    let ids: Vec<u64> = (1..=23).collect();
    let urls = client(&mock)
        .roblox()
        .thumbnail_urls_chunked(&ids, ThumbnailSize::S150x150, ThumbnailType::GameIcon)
        .await
        .unwrap();

    let expected: Vec<String> = ids.iter().map(|id| format!("https://tr.rbxcdn.com/{id}")).collect();
    assert_eq!(urls, expected);

    let calls = mock.calls();
    assert_eq!(calls.len(), 3);
    let sizes: Vec<usize> = calls
        .iter()
        .map(|(name, args)| {
            assert_eq!(name, "plugin:roblox-api|thumbnail_url_bulk");
            assert_eq!(args["thumbnailSize"], json!("S150x150"));
            assert_eq!(args["thumbnailType"], json!("GameIcon"));
            args["ids"].as_array().unwrap().len()
        })
        .collect();
    assert_eq!(sizes, vec![10, 10, 3]);
    assert_eq!(calls[2].1["ids"], json!([21, 22, 23]));
}

#[tokio::test]
async fn chunked_thumbnails_fail_as_a_whole() {
    let mock = MockTransport::new(|_, args| async move {
        if args["ids"][0] == json!(11) {
            return Err(BridgeError::fault("Too Many Requests"));
        }
        Ok(json!(vec!["url"; 10]))
    });

    let ids: Vec<u64> = (1..=30).collect();
    let err = client(&mock)
        .roblox()
        .thumbnail_urls_chunked(&ids, ThumbnailSize::S420x420, ThumbnailType::Avatar)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Too Many Requests");
    assert_eq!(mock.calls().len(), 3);
}

#[tokio::test]
async fn token_thumbnails_and_search() {
    let mock = MockTransport::returning(json!([]));
    let roblox = client(&mock).roblox().clone();

    roblox
        .get_tokens_thumbnails_urls(
            vec!["T1".into()],
            ThumbnailSize::S50x50,
            ThumbnailType::AvatarHeadshot,
        )
        .await
        .unwrap();
    roblox.search("obby").await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].0, "plugin:roblox-api|token_thumbnail_url_bulk");
    assert_eq!(calls[1], ("plugin:roblox-api|omni_search".to_string(), json!({ "queryString": "obby" })));
}
