use std::path::{Path, PathBuf};

use reqwest::Method;

use crate::{
    client::{
        api::{participant::resolve_uploaded, segment},
        session::{MultipartForm, SessionClient},
        upload::{FileCheck, UploadFile},
    },
    error::Error,
    model::{
        api::OkDto,
        conference::{MaterialDto, MaterialInputDto},
        document::{DocumentTemplateDto, UploadedFileDto},
    },
};

pub async fn fetch_public_templates(
    client: &SessionClient,
) -> Result<Vec<DocumentTemplateDto>, Error> {
    let templates = client.get("/api/public/documents/templates").await?;

    Ok(resolve_templates(client, templates))
}

pub async fn fetch_admin_templates(
    client: &SessionClient,
) -> Result<Vec<DocumentTemplateDto>, Error> {
    let templates = client.get("/api/admin/documents/templates").await?;

    Ok(resolve_templates(client, templates))
}

/// Download a template to `dest` (a file path, or a directory receiving `template.name`)
pub async fn download_template(
    client: &SessionClient,
    template: &DocumentTemplateDto,
    dest: &Path,
) -> Result<PathBuf, Error> {
    client
        .download_to(&template.file_url, dest, &template.name)
        .await
}

/// Publish a new version of a document template
pub async fn upload_template(
    client: &SessionClient,
    document_type: &str,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::SIGNED_DOCUMENT.validate(&file)?;

    let form = MultipartForm::new()
        .file("file", file)
        .text("type", document_type);
    let uploaded = client
        .upload(Method::POST, "/api/admin/documents/template", form)
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

/// Replace the published conference program file
pub async fn upload_program_file(
    client: &SessionClient,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::PROGRAM_FILE.validate(&file)?;

    let form = MultipartForm::new().file("file", file);
    let uploaded = client
        .upload(Method::POST, "/api/admin/program/file", form)
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

/// Withdraw the published conference program file
pub async fn delete_program_file(client: &SessionClient) -> Result<OkDto, Error> {
    client.delete("/api/admin/program/file").await
}

/// Publish a conference material
pub async fn upload_material(
    client: &SessionClient,
    material: &MaterialInputDto,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::MATERIAL.validate(&file)?;

    let mut form = MultipartForm::new()
        .file("file", file)
        .text("titleRu", material.title_ru.as_str())
        .text("titleEn", material.title_en.as_str());
    if let Some(kind) = &material.kind {
        form = form.text("type", kind.as_str());
    }
    if let Some(description) = &material.description_ru {
        form = form.text("descriptionRu", description.as_str());
    }
    if let Some(description) = &material.description_en {
        form = form.text("descriptionEn", description.as_str());
    }

    let uploaded = client
        .upload(Method::POST, "/api/admin/materials", form)
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

pub async fn fetch_admin_materials(client: &SessionClient) -> Result<Vec<MaterialDto>, Error> {
    let mut materials: Vec<MaterialDto> = client.get("/api/admin/materials").await?;

    for material in &mut materials {
        material.file_url = client.file_url(&material.file_url);
    }

    Ok(materials)
}

pub async fn delete_material(client: &SessionClient, id: &str) -> Result<OkDto, Error> {
    client
        .delete(&format!("/api/admin/materials/{}", segment(id)))
        .await
}

fn resolve_templates(
    client: &SessionClient,
    templates: Vec<DocumentTemplateDto>,
) -> Vec<DocumentTemplateDto> {
    templates
        .into_iter()
        .map(|mut template| {
            template.file_url = client.file_url(&template.file_url);
            template
        })
        .collect()
}
