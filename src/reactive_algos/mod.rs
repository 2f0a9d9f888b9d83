pub mod wall_follower;
