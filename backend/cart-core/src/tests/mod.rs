mod compare;
mod portal_client;
