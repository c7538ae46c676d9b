//! End-to-end downloads flow against the in-process backend
//!
//! Commands go out through the proxy seam, the backend mutates its
//! list, and the page applies the resulting callbacks from the channel,
//! the same loop the browser drives.


use std::sync::Arc;

use test_helpers::create_download;
use tokio::sync::mpsc;
use webui_pages::downloads::{Command, DownloadsPage};
use webui_pages::model::DownloadItem;
use webui_pages::proxy::{DownloadsProxy, LocalBackend, PageCallback};

async fn drain(page: &mut DownloadsPage, rx: &mut mpsc::Receiver<PageCallback>) {
    while let Ok(callback) = rx.try_recv() {
        page.apply(callback).unwrap();
    }
}

async fn wired_page(
    items: Vec<DownloadItem>,
) -> (DownloadsPage, Arc<LocalBackend>, mpsc::Receiver<PageCallback>) {
    let backend = Arc::new(LocalBackend::with_downloads(items.clone()));
    let (tx, rx) = mpsc::channel(16);
    backend.set_page_sender(tx).await;

    let mut page = DownloadsPage::new(Arc::clone(&backend) as Arc<dyn DownloadsProxy>);
    page.apply(PageCallback::InsertItems { index: 0, items })
        .unwrap();
    (page, backend, rx)
}

#[tokio::test]
async fn remove_flows_through_the_backend_and_back() {
    let (mut page, _backend, mut rx) =
        wired_page(vec![create_download(1), create_download(2)]).await;

    page.handle_command(Command::RemoveItem { index: 0 })
        .await
        .unwrap();
    drain(&mut page, &mut rx).await;

    assert_eq!(page.list().len(), 1);
    assert_eq!(page.list().items()[0].id, 2);
    assert!(page.toast().is_open());
}

#[tokio::test]
async fn undo_restores_the_removed_item() {
    let (mut page, _backend, mut rx) =
        wired_page(vec![create_download(1), create_download(2)]).await;

    page.handle_command(Command::RemoveItem { index: 1 })
        .await
        .unwrap();
    drain(&mut page, &mut rx).await;
    assert_eq!(page.list().len(), 1);

    page.handle_command(Command::Undo).await.unwrap();
    drain(&mut page, &mut rx).await;

    let ids: Vec<u32> = page.list().items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(!page.toast().is_open());
}

#[tokio::test]
async fn clear_all_then_undo_round_trips_the_whole_list() {
    let (mut page, backend, mut rx) = wired_page(vec![
        create_download(1),
        create_download(2),
        create_download(3),
    ])
    .await;

    page.handle_command(Command::ClearAll).await.unwrap();
    drain(&mut page, &mut rx).await;
    assert!(page.is_list_hidden());
    assert!(page.toast().is_open());
    assert!(!page.toast().is_undo_hidden());

    page.handle_command(Command::Undo).await.unwrap();
    drain(&mut page, &mut rx).await;

    let ids: Vec<u32> = page.list().items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(backend.downloads().await.len(), 3);
}
