mod helpers;
mod portal_client;
mod verify;
