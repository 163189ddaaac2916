use crate::controller::{auth, clubs, matches, players, public, templates, tournaments};
use actix_web::web;

pub fn config(conf: &mut web::ServiceConfig) {
    // the read-only zone must be registered before the admin scope so that
    // /api/public/* never falls into the authenticated prefix
    let public_scope = web::scope("/api/public")
        .service(public::public_clubs_handler)
        .service(public::public_club_handler)
        .service(public::public_players_handler)
        .service(public::public_player_handler)
        .service(public::public_tournaments_handler)
        .service(public::public_tournament_leaderboard_handler)
        .service(public::public_matches_handler)
        .service(public::public_tournament_handler)
        .service(public::public_match_handler)
        .service(public::public_global_leaderboard_handler)
        .service(public::public_club_leaderboard_handler);

    let admin_scope = web::scope("/api")
        .service(auth::register_admin_handler)
        .service(auth::login_admin_handler)
        .service(auth::logout_admin_handler)
        .service(auth::admin_info_handler)
        .service(clubs::list_clubs_handler)
        .service(clubs::get_club_handler)
        .service(clubs::create_club_handler)
        .service(clubs::update_club_handler)
        .service(clubs::delete_club_handler)
        .service(players::list_players_handler)
        .service(players::get_player_handler)
        .service(players::create_player_handler)
        .service(players::update_player_handler)
        .service(players::delete_player_handler)
        .service(tournaments::list_tournaments_handler)
        .service(tournaments::add_participants_handler)
        .service(tournaments::recalculate_handler)
        .service(tournaments::get_tournament_handler)
        .service(tournaments::create_tournament_handler)
        .service(tournaments::update_tournament_handler)
        .service(tournaments::delete_tournament_handler)
        .service(matches::get_match_handler)
        .service(matches::create_match_handler)
        .service(matches::update_match_handler)
        .service(matches::delete_match_handler)
        .service(templates::list_templates_handler)
        .service(templates::get_template_handler)
        .service(templates::create_template_handler)
        .service(templates::update_template_handler)
        .service(templates::delete_template_handler);

    conf.service(public_scope);
    conf.service(admin_scope);
}
