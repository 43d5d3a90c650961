use std::sync::mpsc;
use std::thread;

use chess_rules::engine::RequestState;
use chess_rules::{
    EngineError, EngineLink, EngineRequest, Game, GameError, GameStatus, Move, Ticket,
};

type Job = (Ticket, EngineRequest);

/// Answers every request on a worker thread with a fixed script of tokens.
fn spawn_engine(
    link: EngineLink,
    script: Vec<&'static str>,
) -> (
    mpsc::Sender<Job>,
    thread::JoinHandle<Vec<Result<(), EngineError>>>,
) {
    let (tx, rx) = mpsc::channel::<Job>();
    let handle = thread::spawn(move || {
        let mut results = Vec::new();
        for ((ticket, _request), reply) in rx.iter().zip(script) {
            results.push(link.resolve(ticket, reply).map(|_| ()));
        }
        results
    });
    (tx, handle)
}

#[test]
fn reply_delivered_from_another_thread() {
    let link = EngineLink::new();
    let mut game = Game::default();
    let request = EngineRequest::new(game.current(), 4);
    let ticket = link.submit(request.clone()).unwrap();

    let worker = link.clone();
    let best = thread::spawn(move || worker.resolve(ticket, "e2e4"))
        .join()
        .unwrap()
        .unwrap();

    assert!(!link.is_awaiting());
    assert_eq!(
        game.apply_engine_reply(&request, best),
        Ok(GameStatus::InProgress)
    );
    assert_eq!(game.ply_count(), 1);
}

#[test]
fn busy_link_queues_nothing() {
    let link = EngineLink::new();
    let first = link.submit(EngineRequest::default()).unwrap();
    for _ in 0..3 {
        assert_eq!(
            link.submit(EngineRequest::default()),
            Err(EngineError::Busy { pending: first })
        );
    }
    link.resolve(first, "d2d4").unwrap();
    let second = link.submit(EngineRequest::default()).unwrap();
    assert!(second > first);
}

#[test]
fn stopped_request_reply_is_dropped_by_worker() {
    let link = EngineLink::new();
    let (tx, handle) = spawn_engine(link.clone(), vec!["e2e4", "g1f3"]);

    let stale = link.submit(EngineRequest::default()).unwrap();
    assert_eq!(link.stop(), Some(stale));
    let fresh = link.submit(EngineRequest::default()).unwrap();

    tx.send((stale, EngineRequest::default())).unwrap();
    tx.send((fresh, EngineRequest::default())).unwrap();
    drop(tx);

    let results = handle.join().unwrap();
    assert_eq!(
        results,
        vec![Err(EngineError::Superseded { ticket: stale }), Ok(())]
    );
    assert_eq!(link.state(), RequestState::Idle);
}

#[test]
fn engine_plays_a_full_exchange() {
    let link = EngineLink::new();
    let mut game = Game::default();
    let mut engine = |fen: &str, _depth: u32| -> String {
        if fen.contains(" b ") {
            "e7e5".to_string()
        } else {
            "(none)".to_string()
        }
    };

    game.play(Move::new("e2".parse().unwrap(), "e4".parse().unwrap()))
        .unwrap();

    let request = EngineRequest::new(game.current(), EngineRequest::DEFAULT_DEPTH);
    let reply = link.consult(&mut engine, request.clone()).unwrap();
    assert_eq!(
        game.apply_engine_reply(&request, reply),
        Ok(GameStatus::InProgress)
    );
    assert_eq!(
        game.to_fen(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1"
    );

    let request = EngineRequest::new(game.current(), 1);
    let reply = link.consult(&mut engine, request.clone()).unwrap();
    assert_eq!(reply, None);
    assert_eq!(
        game.apply_engine_reply(&request, reply),
        Ok(GameStatus::InProgress)
    );
    assert_eq!(game.ply_count(), 2);
}

#[test]
fn illegal_engine_move_is_rejected_by_game() {
    let link = EngineLink::new();
    let mut game = Game::default();
    let request = EngineRequest::new(game.current(), 2);
    let ticket = link.submit(request.clone()).unwrap();
    let reply = link.resolve(ticket, "e2e5").unwrap();
    assert!(matches!(
        game.apply_engine_reply(&request, reply),
        Err(GameError::IllegalMove { .. })
    ));
    assert_eq!(game.ply_count(), 0);
}

#[test]
fn reply_for_position_left_by_takeback_is_refused() {
    let link = EngineLink::new();
    let mut game = Game::default();
    game.play(Move::new("e2".parse().unwrap(), "e4".parse().unwrap()))
        .unwrap();
    let request = EngineRequest::new(game.current(), 6);
    let ticket = link.submit(request.clone()).unwrap();

    game.takeback().unwrap();
    game.play(Move::new("d2".parse().unwrap(), "d4".parse().unwrap()))
        .unwrap();
    let before = game.to_fen();

    let reply = link.resolve(ticket, "e7e5").unwrap();
    assert!(reply.is_some());
    assert_eq!(
        game.apply_engine_reply(&request, reply),
        Err(GameError::StaleReply {
            requested: request.fen.clone()
        })
    );
    assert_eq!(game.to_fen(), before);
    assert_eq!(game.ply_count(), 1);

    // A fresh request for the new position goes through.
    let request = EngineRequest::new(game.current(), 6);
    let ticket = link.submit(request.clone()).unwrap();
    let reply = link.resolve(ticket, "d7d5").unwrap();
    assert_eq!(
        game.apply_engine_reply(&request, reply),
        Ok(GameStatus::InProgress)
    );
    assert_eq!(game.ply_count(), 2);
}
