mod helpers;
mod home;
