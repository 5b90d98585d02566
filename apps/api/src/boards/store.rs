//! Board persistence. Every mutation is read → mutate → write of one blob;
//! concurrent writers to the same board are last-write-wins.

use tracing::{info, warn};
use uuid::Uuid;

use crate::boards::models::Board;
use crate::copy::models::Brief;
use crate::errors::AppError;
use crate::storage::{get_json, put_json, BlobStore, StorageError};

const BOARDS_PREFIX: &str = "boards/";

fn board_key(id: Uuid) -> String {
    format!("{BOARDS_PREFIX}{id}.json")
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Board {id} not found"))
}

/// All boards, most recently updated first. Corrupt blobs are logged and skipped.
pub async fn list_boards(store: &dyn BlobStore) -> Result<Vec<Board>, AppError> {
    let mut boards = Vec::new();

    for key in store.list(BOARDS_PREFIX).await? {
        match get_json::<Board>(store, &key).await {
            Ok(Some(board)) => boards.push(board),
            Ok(None) => {}
            Err(e @ StorageError::Decode { .. }) => warn!("Skipping unreadable board: {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    boards.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(boards)
}

pub async fn create_board(store: &dyn BlobStore, name: &str) -> Result<Board, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let board = Board::new(name);
    put_json(store, &board_key(board.id), &board).await?;
    info!("Created board {} '{}'", board.id, board.name);
    Ok(board)
}

pub async fn get_board(store: &dyn BlobStore, id: Uuid) -> Result<Board, AppError> {
    get_json(store, &board_key(id))
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn add_briefs(
    store: &dyn BlobStore,
    id: Uuid,
    briefs: Vec<Brief>,
) -> Result<Board, AppError> {
    let mut board = get_board(store, id).await?;
    let added = board.add_briefs(briefs);
    if added > 0 {
        put_json(store, &board_key(id), &board).await?;
    }
    info!("Added {added} briefs to board {id}");
    Ok(board)
}

pub async fn remove_brief(
    store: &dyn BlobStore,
    id: Uuid,
    brief_id: Uuid,
) -> Result<Board, AppError> {
    let mut board = get_board(store, id).await?;
    if !board.remove_brief(brief_id) {
        return Err(AppError::NotFound(format!(
            "Brief {brief_id} not found on board {id}"
        )));
    }
    put_json(store, &board_key(id), &board).await?;
    info!("Removed brief {brief_id} from board {id}");
    Ok(board)
}

pub async fn delete_board(store: &dyn BlobStore, id: Uuid) -> Result<(), AppError> {
    let key = board_key(id);
    if store.get(&key).await?.is_none() {
        return Err(not_found(id));
    }
    store.delete(&key).await?;
    info!("Deleted board {id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::models::fixtures::brief;
    use crate::storage::MemoryBlobStore;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryBlobStore::default();
        let board = create_board(&store, "Spring").await.unwrap();
        let loaded = get_board(&store, board.id).await.unwrap();
        assert_eq!(loaded, board);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let store = MemoryBlobStore::default();
        let err = create_board(&store, "  ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryBlobStore::default();
        let err = get_board(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_and_remove_briefs_persist() {
        let store = MemoryBlobStore::default();
        let board = create_board(&store, "Spring").await.unwrap();
        let one = brief("One");
        let two = brief("Two");

        add_briefs(&store, board.id, vec![one.clone(), two.clone()])
            .await
            .unwrap();
        let updated = remove_brief(&store, board.id, one.id).await.unwrap();
        assert_eq!(updated.briefs, vec![two.clone()]);

        let reloaded = get_board(&store, board.id).await.unwrap();
        assert_eq!(reloaded.briefs, vec![two]);
        assert!(reloaded.updated_at >= board.updated_at);
    }

    #[tokio::test]
    async fn test_remove_unknown_brief_is_not_found() {
        let store = MemoryBlobStore::default();
        let board = create_board(&store, "Spring").await.unwrap();
        let err = remove_brief(&store, board.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg.contains("Brief")));
    }

    #[tokio::test]
    async fn test_list_skips_corrupt_blobs() {
        let store = MemoryBlobStore::default();
        create_board(&store, "Good").await.unwrap();
        store
            .put("boards/garbage.json", b"not json".to_vec())
            .await
            .unwrap();

        let boards = list_boards(&store).await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Good");
    }

    #[tokio::test]
    async fn test_list_orders_by_recent_update() {
        let store = MemoryBlobStore::default();
        let older = create_board(&store, "Older").await.unwrap();
        let _newer = create_board(&store, "Newer").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        add_briefs(&store, older.id, vec![brief("Bump")]).await.unwrap();

        let boards = list_boards(&store).await.unwrap();
        assert_eq!(boards[0].name, "Older");
    }

    #[tokio::test]
    async fn test_delete_board() {
        let store = MemoryBlobStore::default();
        let board = create_board(&store, "Temp").await.unwrap();
        delete_board(&store, board.id).await.unwrap();
        assert!(list_boards(&store).await.unwrap().is_empty());
        assert!(matches!(
            delete_board(&store, board.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
