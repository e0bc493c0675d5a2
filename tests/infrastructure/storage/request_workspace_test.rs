use std::path::PathBuf;

use audioscribe::application::ports::Workspace;
use audioscribe::infrastructure::storage::RequestWorkspace;

#[tokio::test]
async fn given_scratch_root_when_creating_workspace_then_directory_exists_under_root() {
    let root = tempfile::tempdir().unwrap();

    let ws = RequestWorkspace::create(root.path()).unwrap();

    assert!(ws.dir().exists());
    assert!(ws.dir().starts_with(root.path()));
}

#[tokio::test]
async fn given_two_workspaces_when_created_then_paths_and_ids_are_unique() {
    let root = tempfile::tempdir().unwrap();

    let a = RequestWorkspace::create(root.path()).unwrap();
    let b = RequestWorkspace::create(root.path()).unwrap();

    assert_ne!(a.dir(), b.dir());
    assert_ne!(a.request_id(), b.request_id());
}

#[tokio::test]
async fn given_staged_files_when_workspace_drops_then_everything_is_removed() {
    let root = tempfile::tempdir().unwrap();
    let dir: PathBuf;

    {
        let ws = RequestWorkspace::create(root.path()).unwrap();
        dir = ws.dir().to_path_buf();
        ws.stage("upload-input", b"raw bytes").await.unwrap();
        ws.stage("chunk-0.mp3", b"chunk bytes").await.unwrap();
        assert!(dir.join("upload-input").exists());
    }

    assert!(!dir.exists());
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_workspace_when_staging_then_returns_path_inside_workspace() {
    let root = tempfile::tempdir().unwrap();
    let ws = RequestWorkspace::create(root.path()).unwrap();

    let path = ws.stage("chunk-1.mp3", b"data").await.unwrap();

    assert!(path.starts_with(ws.dir()));
    assert_eq!(std::fs::read(&path).unwrap(), b"data");
}

#[tokio::test]
async fn given_missing_scratch_root_when_creating_workspace_then_root_is_created() {
    let root = tempfile::tempdir().unwrap();
    let nested = root.path().join("scratch/audioscribe");

    let ws = RequestWorkspace::create(&nested).unwrap();

    assert!(nested.exists());
    assert!(ws.dir().starts_with(&nested));
}
