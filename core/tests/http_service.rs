//! End-to-end submission against an in-process waybill service stub.

#![cfg(feature = "native")]

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use waybill_core::config::BULK_PATH;
use waybill_core::{
    BulkWaybillForm, DeliveryError, Feedback, FileSink, HttpWaybillService, LabelSize,
    SelectedFile, ServiceConfig, SubmitError, WaybillService,
};

const PDF: &[u8] = b"%PDF-1.7\n%stub\n";

#[derive(Debug, Clone)]
struct ReceivedField {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

#[derive(Clone)]
struct StubState {
    received: Arc<Mutex<Vec<ReceivedField>>>,
    reject_with: Option<&'static str>,
}

async fn bulk(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let content_type = field.content_type().map(|s| s.to_string());
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        state.received.lock().unwrap().push(ReceivedField {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    match state.reject_with {
        Some(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        None => (
            [
                (header::CONTENT_DISPOSITION, "attachment; filename=bulk-waybills.pdf"),
                (header::CONTENT_TYPE, "application/pdf"),
            ],
            PDF,
        )
            .into_response(),
    }
}

async fn spawn_stub(reject_with: Option<&'static str>) -> (ServiceConfig, Arc<Mutex<Vec<ReceivedField>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        received: received.clone(),
        reject_with,
    };
    let app = Router::new().route(BULK_PATH, post(bulk)).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ServiceConfig::new(format!("http://{}", addr)).unwrap();
    (config, received)
}

#[derive(Default)]
struct MemorySink {
    files: RefCell<Vec<(String, Vec<u8>)>>,
}

impl FileSink for MemorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<(), DeliveryError> {
        self.files
            .borrow_mut()
            .push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

fn orders_csv() -> SelectedFile {
    SelectedFile::new(
        "orders.csv",
        b"consignee,pincode,weight\nAsha,400001,1.2\n".to_vec(),
    )
}

#[tokio::test]
async fn test_multipart_upload_and_pdf_delivery() {
    let (config, received) = spawn_stub(None).await;
    let service = HttpWaybillService::new(config);
    let sink = MemorySink::default();

    let mut form = BulkWaybillForm::new();
    form.select_file(orders_csv());
    form.set_label_size(LabelSize::Label4x6);

    let filename = form.submit(&service, &sink).await.unwrap();

    assert_eq!(filename, "bulk-waybills.pdf");
    assert_eq!(
        *sink.files.borrow(),
        vec![("bulk-waybills.pdf".to_string(), PDF.to_vec())]
    );
    assert!(form.selected_file().is_none());
    assert!(!form.in_progress());

    let fields = received.lock().unwrap().clone();
    let file = fields.iter().find(|f| f.name == "file").expect("file field");
    assert_eq!(file.file_name.as_deref(), Some("orders.csv"));
    assert_eq!(file.content_type.as_deref(), Some("text/csv"));
    assert_eq!(file.bytes, orders_csv().bytes());

    let size = fields.iter().find(|f| f.name == "size").expect("size field");
    assert_eq!(size.bytes, b"LABEL_4X6");
}

#[tokio::test]
async fn test_rejection_body_becomes_feedback() {
    let (config, _received) = spawn_stub(Some("Row 1: invalid consignee pincode")).await;
    let service = HttpWaybillService::new(config);
    let sink = MemorySink::default();

    let mut form = BulkWaybillForm::new();
    form.select_file(orders_csv());

    let err = form.submit(&service, &sink).await.unwrap_err();

    assert!(matches!(err, SubmitError::Rejected { status: 400, .. }));
    assert!(sink.files.borrow().is_empty());
    assert_eq!(
        form.feedback(),
        Some(&Feedback::Error("Row 1: invalid consignee pincode".into()))
    );
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = HttpWaybillService::new(ServiceConfig::new(format!("http://{}", addr)).unwrap());
    let sink = MemorySink::default();
    let mut form = BulkWaybillForm::new();
    form.select_file(orders_csv());

    let err = form.submit(&service, &sink).await.unwrap_err();

    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(!form.in_progress());
    assert!(form.feedback().unwrap().is_error());
    assert!(!form.feedback().unwrap().message().is_empty());
}

#[test]
fn test_template_url_uses_config() {
    let config = ServiceConfig::new("http://localhost:8080").unwrap();
    let service = HttpWaybillService::new(config);
    assert_eq!(
        service.template_url(),
        "http://localhost:8080/api/bluedart/waybill/bulk/template"
    );
}
